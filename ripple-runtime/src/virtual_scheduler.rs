// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic cooperative timer queue.
//!
//! [`VirtualScheduler`] keeps its own clock, starting at zero, that only moves
//! when [`advance`](VirtualScheduler::advance) is called. Due timers fire in
//! deadline order; timers sharing a deadline fire in the order they were
//! scheduled. Callbacks run without the queue locked, so they may schedule or
//! cancel other timers, including their own.
//!
//! Deadlines saturate at [`Duration::MAX`]. A repeating timer that reaches it
//! ticks one last time and is retired.
//!
//! # Example
//!
//! ```
//! use ripple_runtime::{Scheduler, VirtualScheduler};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&fired);
//! scheduler.schedule(
//!     Duration::from_millis(50),
//!     Box::new(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//! );
//!
//! scheduler.advance(Duration::from_millis(49));
//! assert_eq!(fired.load(Ordering::SeqCst), 0);
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! ```

use crate::scheduler::{effective_period, RepeatingTask, Scheduler, Task, TimerHandle};
use core::fmt::{self, Debug};
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Position of an entry in the queue: deadline first, then scheduling order.
type QueueKey = (Duration, u64);

enum Job {
    Once(Task),
    Repeating { period: Duration, task: RepeatingTask },
}

struct Entry {
    handle: TimerHandle,
    job: Job,
}

#[derive(Default)]
struct TimerQueue {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    due: BTreeMap<QueueKey, Entry>,
    keys: HashMap<TimerHandle, QueueKey>,
}

impl TimerQueue {
    fn insert(&mut self, deadline: Duration, handle: TimerHandle, job: Job) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.keys.insert(handle, key);
        self.due.insert(key, Entry { handle, job });
    }

    fn issue_handle(&mut self) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

enum Fire {
    Once(Task),
    Repeating(RepeatingTask),
}

/// Hand-driven [`Scheduler`] backed by a virtual clock.
///
/// Cheap to clone; all clones share the same queue and clock.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Arc<Mutex<TimerQueue>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.lock().now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().due.len()
    }

    /// Moves the clock forward by `by`, firing every timer that falls due on
    /// the way, including timers scheduled by callbacks fired in this call.
    pub fn advance(&self, by: Duration) {
        let target = self.queue.lock().now.saturating_add(by);

        while let Some(fire) = self.pop_due(target) {
            match fire {
                Fire::Once(task) => task(),
                Fire::Repeating(task) => task(),
            }
        }

        self.queue.lock().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Fire> {
        let mut queue = self.queue.lock();
        let key = *queue.due.keys().next()?;
        if key.0 > target {
            return None;
        }

        let entry = queue.due.remove(&key)?;
        queue.now = key.0;

        match entry.job {
            Job::Once(task) => {
                queue.keys.remove(&entry.handle);
                Some(Fire::Once(task))
            }
            Job::Repeating { period, task } => {
                let tick = Arc::clone(&task);
                let next = key.0.saturating_add(period);
                if next > key.0 {
                    queue.insert(next, entry.handle, Job::Repeating { period, task });
                } else {
                    // The clock saturated; this is the last tick.
                    queue.keys.remove(&entry.handle);
                }
                Some(Fire::Repeating(tick))
            }
        }
    }
}

impl Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.due.len())
            .finish()
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let mut queue = self.queue.lock();
        let handle = queue.issue_handle();
        let deadline = queue.now.saturating_add(delay);
        queue.insert(deadline, handle, Job::Once(task));
        handle
    }

    fn schedule_repeating(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        let period = effective_period(period);
        let mut queue = self.queue.lock();
        let handle = queue.issue_handle();
        let deadline = queue.now.saturating_add(period);
        queue.insert(deadline, handle, Job::Repeating { period, task });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut queue = self.queue.lock();
        if let Some(key) = queue.keys.remove(&handle) {
            queue.due.remove(&key);
        }
    }
}
