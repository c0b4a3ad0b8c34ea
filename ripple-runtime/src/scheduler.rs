// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancelable timer capability.
//!
//! A [`Scheduler`] runs callbacks after a delay, once or repeatedly, and can
//! cancel them by the [`TimerHandle`] it returned. Time-based stream operators
//! take a scheduler as an argument instead of reaching for a platform timer.

use core::fmt::{self, Debug, Display};
use core::time::Duration;
use std::sync::Arc;

/// Smallest delay a scheduler distinguishes from "now".
///
/// Repeating timers never tick faster than this.
pub const MIN_TIMER_GRANULARITY: Duration = Duration::from_millis(1);

/// One-shot callback run when a timer fires.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Callback run on every tick of a repeating timer.
pub type RepeatingTask = Arc<dyn Fn() + Send + Sync + 'static>;

/// Opaque identifier of a scheduled timer, unique within its scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Cancelable-timer capability required by time-based operators.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Runs `task` once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;

    /// Runs `task` every `period`, first tick one `period` from now.
    fn schedule_repeating(&self, period: Duration, task: RepeatingTask) -> TimerHandle;

    /// Cancels a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

/// Clamps a repeating period so a timer can never spin without advancing time.
pub(crate) fn effective_period(period: Duration) -> Duration {
    period.max(MIN_TIMER_GRANULARITY)
}
