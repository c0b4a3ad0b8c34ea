// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce.
//!
//! Every upstream value replaces the pending one and restarts a `gap` timer;
//! the pending value is emitted when the timer fires, that is after `gap`
//! without any newer value.
//!
//! Upstream completion completes the derived stream at once. A value still
//! pending at that moment is dropped and its timer canceled.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_runtime::VirtualScheduler;
//! use ripple_stream_time::DebounceTimeExt;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let source = Stream::<&str>::new();
//! let settled = source.debounce_time(Duration::from_millis(50), &scheduler);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! settled.subscribe(move |v, _| sink.lock().unwrap().push(*v));
//!
//! source.next("r");
//! scheduler.advance(Duration::from_millis(10));
//! source.next("ri");
//! scheduler.advance(Duration::from_millis(10));
//! source.next("rip");
//! scheduler.advance(Duration::from_millis(49));
//! assert!(seen.lock().unwrap().is_empty());
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(*seen.lock().unwrap(), vec!["rip"]);
//! ```

use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use ripple_runtime::{Scheduler, TimerHandle};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period used when a caller has no specific requirement.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);

#[derive(Default)]
struct Pending {
    generation: u64,
    timer: Option<TimerHandle>,
}

/// Extension trait providing the `debounce_time` operator.
pub trait DebounceTimeExt<T: StreamValue> {
    /// Emits a value once `gap` passed without a newer one.
    fn debounce_time<S: Scheduler>(&self, gap: Duration, scheduler: &S) -> Stream<T>;
}

impl<T: StreamValue> DebounceTimeExt<T> for Stream<T> {
    fn debounce_time<S: Scheduler>(&self, gap: Duration, scheduler: &S) -> Stream<T> {
        let derived = Stream::new();
        let weak = derived.downgrade();
        let upstream = self.clone();
        let scheduler = scheduler.clone();

        derived.on_subscribe_once(move || {
            let Some(derived) = weak.upgrade() else {
                return;
            };

            let pending = Arc::new(Mutex::new(Pending::default()));

            let on_done = Arc::clone(&pending);
            let canceler = scheduler.clone();
            derived.on_completed(move || {
                let mut pending = on_done.lock();
                pending.generation += 1;
                if let Some(handle) = pending.timer.take() {
                    debug!("debounce_time: dropping pending value of {}", handle);
                    canceler.cancel(handle);
                }
            });

            let target = derived.clone();
            let scheduler = scheduler.clone();
            upstream.subscribe_for(&derived, move |value, _| {
                let (generation, previous) = {
                    let mut state = pending.lock();
                    state.generation += 1;
                    (state.generation, state.timer.take())
                };
                if let Some(previous) = previous {
                    scheduler.cancel(previous);
                }

                let emitter = target.clone();
                let armed = Arc::clone(&pending);
                let value = value.clone();
                let handle = scheduler.schedule(
                    gap,
                    Box::new(move || {
                        {
                            let mut state = armed.lock();
                            if state.generation != generation {
                                return;
                            }
                            state.timer = None;
                        }
                        if !emitter.is_completed() {
                            emitter.next(value);
                        }
                    }),
                );

                let mut state = pending.lock();
                if state.generation == generation {
                    state.timer = Some(handle);
                }
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
