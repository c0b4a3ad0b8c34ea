// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based throttle.
//!
//! The first value passes and closes the throttle; upstream values are
//! ignored until a timer reopens it. The timer runs for `gap` minus one
//! [`MIN_TIMER_GRANULARITY`] so that a value arriving exactly `gap` after the
//! previous one passes even when both timers fall on the same tick.
//!
//! A `gap` of at most one granularity unit cannot be expressed, so the
//! operator returns the upstream itself.
//!
//! The pending reopen timer is canceled when the derived stream completes.

use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use ripple_runtime::{Scheduler, TimerHandle, MIN_TIMER_GRANULARITY};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Extension trait providing the `throttle_time` operator.
pub trait ThrottleTimeExt<T: StreamValue> {
    /// Lets at most one value through per `gap`, leading edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::Stream;
    /// use ripple_runtime::VirtualScheduler;
    /// use ripple_stream_time::ThrottleTimeExt;
    /// use std::sync::{Arc, Mutex};
    /// use std::time::Duration;
    ///
    /// let scheduler = VirtualScheduler::new();
    /// let source = Stream::<i32>::new();
    /// let throttled = source.throttle_time(Duration::from_millis(100), &scheduler);
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// throttled.subscribe(move |v, _| sink.lock().unwrap().push(*v));
    ///
    /// source.next(1);
    /// source.next(2);
    /// scheduler.advance(Duration::from_millis(100));
    /// source.next(3);
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    /// ```
    fn throttle_time<S: Scheduler>(&self, gap: Duration, scheduler: &S) -> Stream<T>;
}

impl<T: StreamValue> ThrottleTimeExt<T> for Stream<T> {
    fn throttle_time<S: Scheduler>(&self, gap: Duration, scheduler: &S) -> Stream<T> {
        if gap <= MIN_TIMER_GRANULARITY {
            return self.clone();
        }
        let closed_for = gap - MIN_TIMER_GRANULARITY;

        let derived = Stream::new();
        let weak = derived.downgrade();
        let upstream = self.clone();
        let scheduler = scheduler.clone();

        derived.on_subscribe_once(move || {
            let Some(derived) = weak.upgrade() else {
                return;
            };

            let open = Arc::new(AtomicBool::new(true));
            let reopen_timer: Arc<Mutex<Option<TimerHandle>>> = Arc::new(Mutex::new(None));

            let pending = Arc::clone(&reopen_timer);
            let canceler = scheduler.clone();
            derived.on_completed(move || {
                if let Some(handle) = pending.lock().take() {
                    debug!("throttle_time: canceling {}", handle);
                    canceler.cancel(handle);
                }
            });

            let target = derived.clone();
            let scheduler = scheduler.clone();
            upstream.subscribe_for(&derived, move |value, _| {
                if !open.swap(false, Ordering::SeqCst) {
                    return;
                }
                target.next(value.clone());
                if target.is_completed() {
                    return;
                }

                let reopen = Arc::clone(&open);
                let slot = Arc::clone(&reopen_timer);
                let handle = scheduler.schedule(
                    closed_for,
                    Box::new(move || {
                        slot.lock().take();
                        reopen.store(true, Ordering::SeqCst);
                    }),
                );
                *reopen_timer.lock() = Some(handle);
            });
        });

        let completion = derived.downgrade();
        self.on_completed(move || {
            if let Some(derived) = completion.upgrade() {
                derived.complete();
            }
        });

        derived
    }
}
