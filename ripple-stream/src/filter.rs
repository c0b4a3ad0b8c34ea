// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing the `filter` operator.
pub trait FilterExt<T: StreamValue> {
    /// Forwards the values for which `predicate` holds.
    fn filter<P>(&self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: StreamValue> FilterExt<T> for Stream<T> {
    fn filter<P>(&self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);

        let derived = lazy(move |derived: &Stream<T>| {
            let target = derived.clone();
            let predicate = Arc::clone(&predicate);
            upstream.subscribe_for(derived, move |value, _| {
                if predicate(value) {
                    target.next(value.clone());
                }
            });
        });

        complete_with(self, &derived);
        derived
    }
}
