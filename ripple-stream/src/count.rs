// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Extension trait providing the `count` operator.
pub trait CountExt<T: StreamValue> {
    /// Emits the running 1-based number of upstream values, once per value.
    fn count(&self) -> Stream<usize>;
}

impl<T: StreamValue> CountExt<T> for Stream<T> {
    fn count(&self) -> Stream<usize> {
        let upstream = self.clone();

        let derived = lazy(move |derived: &Stream<usize>| {
            let target = derived.clone();
            let seen = AtomicUsize::new(0);
            upstream.subscribe_for(derived, move |_, _| {
                target.next(seen.fetch_add(1, Ordering::SeqCst) + 1);
            });
        });

        complete_with(self, &derived);
        derived
    }
}
