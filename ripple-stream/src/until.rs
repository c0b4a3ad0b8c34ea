// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Extension trait providing the `until` operator.
pub trait UntilExt<T: StreamValue> {
    /// Suppresses values until the first one for which `condition` holds.
    ///
    /// The matching value itself is swallowed; every later value passes
    /// unconditionally.
    ///
    /// ```rust
    /// use ripple_core::Stream;
    /// use ripple_stream::{RunExt, ToArrayExt, UntilExt};
    ///
    /// let source: Stream<i32> = [1, 5, 2, 6].into_iter().collect();
    /// let after = source.until(|v| *v >= 5).to_array();
    /// assert_eq!(after.run(), Some(vec![2, 6]));
    /// ```
    fn until<P>(&self, condition: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: StreamValue> UntilExt<T> for Stream<T> {
    fn until<P>(&self, condition: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let condition = Arc::new(condition);

        let derived = lazy(move |derived: &Stream<T>| {
            let target = derived.clone();
            let condition = Arc::clone(&condition);
            let matched = AtomicBool::new(false);
            upstream.subscribe_for(derived, move |value, _| {
                if matched.load(Ordering::SeqCst) {
                    target.next(value.clone());
                } else if condition(value) {
                    matched.store(true, Ordering::SeqCst);
                }
            });
        });

        complete_with(self, &derived);
        derived
    }
}
