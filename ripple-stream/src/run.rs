// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing synchronous terminal extraction.
pub trait RunExt<T: StreamValue> {
    /// Subscribes, which runs activation and any synchronous producer, and
    /// returns the last value delivered meanwhile.
    ///
    /// Falls back to the stream's current value when nothing was delivered
    /// during the call, and to `None` when nothing was ever emitted. The
    /// capturing subscription is released before returning.
    fn run(&self) -> Option<T>;
}

impl<T: StreamValue> RunExt<T> for Stream<T> {
    fn run(&self) -> Option<T> {
        let captured = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&captured);
        let subscription = self.subscribe(move |value, _| *sink.lock() = Some(value.clone()));
        subscription.unsubscribe();

        let delivered = captured.lock().take();
        delivered.or_else(|| self.value())
    }
}
