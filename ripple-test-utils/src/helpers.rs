// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::Recorder;
use ripple_core::{Stream, StreamValue};

/// Subscribes to `stream` and returns what it emitted synchronously during
/// that call, which for finite factories is everything.
pub fn collect_sync<T: StreamValue>(stream: &Stream<T>) -> Vec<T> {
    let (recorder, subscription) = Recorder::attach_with_subscription(stream);
    subscription.unsubscribe();
    recorder.values()
}

/// Panics unless `stream` has completed.
pub fn assert_completed<T: StreamValue>(stream: &Stream<T>) {
    assert!(
        stream.is_completed(),
        "Expected {} to be completed",
        stream.id()
    );
}

/// Panics if `stream` has completed.
pub fn assert_not_completed<T: StreamValue>(stream: &Stream<T>) {
    assert!(
        !stream.is_completed(),
        "Expected {} to still be running",
        stream.id()
    );
}
