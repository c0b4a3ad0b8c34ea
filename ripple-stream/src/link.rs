// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Wiring shared by every operator.
//
// A derived stream references its upstream strongly from its activation
// handler; the upstream references the derived stream strongly only from the
// subscriber installed at activation, and weakly from completion handlers.

use ripple_core::{Stream, StreamValue};

/// Creates an inert stream whose `activate` runs on its first subscription.
pub(crate) fn lazy<U, A>(activate: A) -> Stream<U>
where
    U: StreamValue,
    A: Fn(&Stream<U>) + Send + Sync + 'static,
{
    let derived = Stream::new();
    let weak = derived.downgrade();
    derived.on_subscribe_once(move || {
        if let Some(derived) = weak.upgrade() {
            activate(&derived);
        }
    });
    derived
}

/// Completes `derived` when `upstream` completes.
pub(crate) fn complete_with<T, U>(upstream: &Stream<T>, derived: &Stream<U>)
where
    T: StreamValue,
    U: StreamValue,
{
    let weak = derived.downgrade();
    upstream.on_completed(move || {
        if let Some(derived) = weak.upgrade() {
            derived.complete();
        }
    });
}
