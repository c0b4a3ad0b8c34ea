// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::link::lazy;
use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing the `to_array` operator.
pub trait ToArrayExt<T: StreamValue> {
    /// Buffers every upstream value and emits them as one `Vec` when the
    /// upstream completes, then completes.
    fn to_array(&self) -> Stream<Vec<T>>;
}

impl<T: StreamValue> ToArrayExt<T> for Stream<T> {
    fn to_array(&self) -> Stream<Vec<T>> {
        let upstream = self.clone();
        let buffer = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&buffer);
        let derived = lazy(move |derived: &Stream<Vec<T>>| {
            let sink = Arc::clone(&sink);
            upstream.subscribe_for(derived, move |value, _| sink.lock().push(value.clone()));
        });

        let weak = derived.downgrade();
        self.on_completed(move || {
            if let Some(derived) = weak.upgrade() {
                let values = core::mem::take(&mut *buffer.lock());
                derived.next(values);
                derived.complete();
            }
        });

        derived
    }
}
