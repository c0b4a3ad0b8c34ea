// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Factories building self-producing streams.
//!
//! Every factory returns an inert stream whose producer starts on the first
//! subscription. Finite producers emit synchronously inside that `subscribe`
//! call and then complete, so a second subscriber sees nothing.
//!
//! ```
//! use ripple_core::Stream;
//! use std::sync::{Arc, Mutex};
//!
//! let squares = Stream::generate(4, |i| i * i);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! squares.subscribe(move |value, _| sink.lock().unwrap().push(*value));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1, 4, 9]);
//! assert!(squares.is_completed());
//! ```

use crate::stream::Stream;
use crate::stream_value::StreamValue;
use parking_lot::Mutex;
use ripple_runtime::Deferred;

impl<T: StreamValue> Stream<T> {
    /// Emits `f(0)`, `f(1)`, .. `f(size - 1)` on activation, then completes.
    ///
    /// Production stops early if the stream gets completed from within a
    /// subscriber.
    #[must_use]
    pub fn generate<F>(size: usize, f: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        let stream = Self::new();
        let weak = stream.downgrade();

        stream.on_subscribe_once(move || {
            let Some(stream) = weak.upgrade() else {
                return;
            };
            for index in 0..size {
                if stream.is_completed() {
                    break;
                }
                stream.next(f(index));
            }
            stream.complete();
        });

        stream
    }

    /// Emits `value` once on activation, then completes.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        Self::generate(1, move |_| value.clone())
    }

    /// Emits the resolved value of `deferred` once, then completes.
    ///
    /// The continuation is registered on first activation; nothing is emitted
    /// if the deferred never resolves.
    #[must_use]
    pub fn from_deferred<D>(deferred: D) -> Self
    where
        D: Deferred<Output = T>,
    {
        let stream = Self::new();
        let weak = stream.downgrade();
        let pending = Mutex::new(Some(deferred));

        stream.on_subscribe_once(move || {
            let (Some(stream), Some(deferred)) = (weak.upgrade(), pending.lock().take()) else {
                return;
            };
            deferred.then(Box::new(move |value| {
                stream.next(value);
                stream.complete();
            }));
        });

        stream
    }
}

/// Emits the items in order on activation, then completes.
impl<T: StreamValue> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        Self::generate(items.len(), move |index| items[index].clone())
    }
}
