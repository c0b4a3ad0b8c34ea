// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms every value.

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing the `map` operator.
pub trait MapExt<T: StreamValue> {
    /// Forwards `f(&value)` for every upstream value and completes with the
    /// upstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::Stream;
    /// use ripple_stream::{MapExt, RunExt};
    ///
    /// let doubled = Stream::from_value(21).map(|v| v * 2);
    /// assert_eq!(doubled.run(), Some(42));
    /// ```
    fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: StreamValue,
        F: Fn(&T) -> U + Send + Sync + 'static;
}

impl<T: StreamValue> MapExt<T> for Stream<T> {
    fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: StreamValue,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);

        let derived = lazy(move |derived: &Stream<U>| {
            let target = derived.clone();
            let f = Arc::clone(&f);
            upstream.subscribe_for(derived, move |value, _| target.next(f(value)));
        });

        complete_with(self, &derived);
        derived
    }
}
