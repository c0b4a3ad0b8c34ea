// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::link::lazy;
use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing the `reduce` operator.
pub trait ReduceExt<T: StreamValue> {
    /// Folds every upstream value into a running accumulator and emits the
    /// final accumulator once, when the upstream completes.
    ///
    /// `accumulator` receives the running value, the upstream value and its
    /// emission index. The seed is emitted if nothing was folded.
    ///
    /// ```rust
    /// use ripple_core::Stream;
    /// use ripple_stream::{ReduceExt, RunExt};
    ///
    /// let sum = Stream::generate(4, |i| i).reduce(|acc, v, _| acc + v, 0);
    /// assert_eq!(sum.run(), Some(6));
    /// ```
    fn reduce<K, F>(&self, accumulator: F, seed: K) -> Stream<K>
    where
        K: StreamValue,
        F: Fn(K, &T, usize) -> K + Send + Sync + 'static;
}

impl<T: StreamValue> ReduceExt<T> for Stream<T> {
    fn reduce<K, F>(&self, accumulator: F, seed: K) -> Stream<K>
    where
        K: StreamValue,
        F: Fn(K, &T, usize) -> K + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let running = Arc::new(Mutex::new(seed));
        let accumulator = Arc::new(accumulator);

        let state = Arc::clone(&running);
        let derived = lazy(move |derived: &Stream<K>| {
            let state = Arc::clone(&state);
            let accumulator = Arc::clone(&accumulator);
            upstream.subscribe_for(derived, move |value, index| {
                let current = state.lock().clone();
                let folded = accumulator(current, value, index);
                *state.lock() = folded;
            });
        });

        let weak = derived.downgrade();
        self.on_completed(move || {
            if let Some(derived) = weak.upgrade() {
                let total = running.lock().clone();
                derived.next(total);
                derived.complete();
            }
        });

        derived
    }
}
