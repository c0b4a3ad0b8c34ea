// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Repeating-timer factory.
//!
//! [`interval`] returns an inert stream. Its first subscription starts a
//! repeating timer on the given scheduler; tick `n` (0-based) emits `f(n)`.
//! The timer is canceled when the stream completes, whether it is completed
//! directly or by a downstream `take_and_complete`.
//!
//! # Example
//!
//! ```rust
//! use ripple_runtime::VirtualScheduler;
//! use ripple_stream::{TakeExt, ToArrayExt};
//! use ripple_stream_time::interval;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let ticks = interval(Duration::from_millis(100), &scheduler, |n| n * 10);
//! let collected = ticks.take_and_complete(3).to_array();
//!
//! let seen = Arc::new(Mutex::new(None));
//! let sink = Arc::clone(&seen);
//! collected.subscribe(move |values, _| *sink.lock().unwrap() = Some(values.clone()));
//!
//! scheduler.advance(Duration::from_millis(350));
//! assert_eq!(*seen.lock().unwrap(), Some(vec![0, 10, 20]));
//! assert_eq!(scheduler.pending(), 0);
//! ```

use ripple_core::{Stream, StreamValue};
use ripple_runtime::Scheduler;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Emits `f(0)`, `f(1)`, .. every `period`, starting on first subscription.
///
/// Periods below [`MIN_TIMER_GRANULARITY`](ripple_runtime::MIN_TIMER_GRANULARITY)
/// are clamped to it by the scheduler.
pub fn interval<T, S, F>(period: Duration, scheduler: &S, f: F) -> Stream<T>
where
    T: StreamValue,
    S: Scheduler,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let stream = Stream::new();
    let weak = stream.downgrade();
    let scheduler = scheduler.clone();
    let f = Arc::new(f);

    stream.on_subscribe_once(move || {
        let Some(stream) = weak.upgrade() else {
            return;
        };

        let ticks = AtomicUsize::new(0);
        let producer = stream.clone();
        let f = Arc::clone(&f);
        let handle = scheduler.schedule_repeating(
            period,
            Arc::new(move || {
                if producer.is_completed() {
                    return;
                }
                producer.next(f(ticks.fetch_add(1, Ordering::SeqCst)));
            }),
        );
        debug!("interval {}: started {} every {:?}", stream.id(), handle, period);

        let scheduler = scheduler.clone();
        let id = stream.id();
        stream.on_completed(move || {
            debug!("interval {}: canceling {}", id, handle);
            scheduler.cancel(handle);
        });
    });

    stream
}
