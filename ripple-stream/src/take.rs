// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator - limits a stream to its first `n` values.
//!
//! The derived stream completes right after the `n`th value. `take` leaves the
//! upstream running; `take_and_complete` completes it as well, which is how a
//! consumer stops an infinite producer such as an interval.
//!
//! `take(0)` completes as soon as it is subscribed, without subscribing the
//! upstream.
//!
//! # Examples
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_stream::{TakeExt, ToArrayExt, RunExt};
//!
//! let source: Stream<i32> = [1, 2, 3, 4].into_iter().collect();
//! assert_eq!(source.take(2).to_array().run(), Some(vec![1, 2]));
//! ```
//!
//! # See Also
//!
//! - [`UntilExt::until`](crate::UntilExt::until) - suppress values until a condition

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue, WeakStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `take` operators.
pub trait TakeExt<T: StreamValue> {
    /// Forwards up to `n` values, then completes. The upstream keeps running.
    fn take(&self, n: usize) -> Stream<T>;

    /// Forwards up to `n` values, then completes both itself and the upstream.
    fn take_and_complete(&self, n: usize) -> Stream<T>;
}

impl<T: StreamValue> TakeExt<T> for Stream<T> {
    fn take(&self, n: usize) -> Stream<T> {
        take_impl(self, n, false)
    }

    fn take_and_complete(&self, n: usize) -> Stream<T> {
        take_impl(self, n, true)
    }
}

fn take_impl<T: StreamValue>(upstream: &Stream<T>, n: usize, complete_upstream: bool) -> Stream<T> {
    let source = upstream.clone();

    let derived = lazy(move |derived: &Stream<T>| {
        let owner = complete_upstream.then(|| source.downgrade());

        if n == 0 {
            derived.complete();
            finish_upstream(owner.as_ref());
            return;
        }

        let target = derived.clone();
        let taken = Arc::new(AtomicUsize::new(0));
        source.subscribe_for(derived, move |value, _| {
            let position = taken.fetch_add(1, Ordering::SeqCst);
            if position >= n {
                return;
            }
            target.next(value.clone());
            if position + 1 == n {
                target.complete();
                finish_upstream(owner.as_ref());
            }
        });
    });

    complete_with(upstream, &derived);
    derived
}

fn finish_upstream<T: StreamValue>(owner: Option<&WeakStream<T>>) {
    if let Some(upstream) = owner.and_then(WeakStream::upgrade) {
        debug!("take: completing upstream {}", upstream.id());
        upstream.complete();
    }
}
