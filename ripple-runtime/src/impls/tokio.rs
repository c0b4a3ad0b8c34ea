// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::deferred::{Continuation, Deferred};
use crate::scheduler::{effective_period, RepeatingTask, Scheduler, Task, TimerHandle};
use crate::timer::Timer;
use core::future::Future;
use parking_lot::Mutex;
use ripple_error::{Result, RippleError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

#[derive(Clone, Debug)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}

/// [`Scheduler`] that runs every timer as a task on a Tokio runtime.
///
/// Tasks sleep through the [`Timer`] abstraction; canceling aborts the task.
/// Callbacks run on runtime worker threads.
#[derive(Clone, Debug)]
pub struct TokioScheduler<TM: Timer = TokioTimer> {
    handle: Handle,
    timer: TM,
    next_handle: Arc<AtomicU64>,
    tasks: Arc<Mutex<HashMap<TimerHandle, AbortHandle>>>,
}

impl TokioScheduler<TokioTimer> {
    /// Binds to the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::RuntimeUnavailable`] outside a Tokio runtime.
    pub fn try_current() -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|err| RippleError::runtime_unavailable(format!("TokioScheduler: {err}")))?;
        Ok(Self::with_timer(handle, TokioTimer))
    }
}

impl<TM: Timer> TokioScheduler<TM> {
    #[must_use]
    pub fn with_timer(handle: Handle, timer: TM) -> Self {
        Self {
            handle,
            timer,
            next_handle: Arc::new(AtomicU64::new(0)),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of timers spawned and neither fired nor canceled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    fn issue_handle(&self) -> TimerHandle {
        TimerHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed))
    }

    fn spawn<F>(&self, id: TimerHandle, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Registered under the lock so a fast-firing task cannot remove its
        // entry before it exists.
        let mut tasks = self.tasks.lock();
        let join = self.handle.spawn(future);
        tasks.insert(id, join.abort_handle());
    }
}

impl<TM: Timer> Scheduler for TokioScheduler<TM> {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = self.issue_handle();
        let timer = self.timer.clone();
        let tasks = Arc::clone(&self.tasks);

        self.spawn(id, async move {
            timer.sleep_future(delay).await;
            tasks.lock().remove(&id);
            task();
        });
        id
    }

    fn schedule_repeating(&self, period: Duration, task: RepeatingTask) -> TimerHandle {
        let id = self.issue_handle();
        let period = effective_period(period);
        let timer = self.timer.clone();

        self.spawn(id, async move {
            loop {
                timer.sleep_future(period).await;
                task();
            }
        });
        id
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = self.tasks.lock().remove(&handle) {
            task.abort();
        }
    }
}

/// [`Deferred`] wrapping a future, driven on a Tokio runtime.
///
/// The future is only spawned once a continuation is registered.
pub struct TokioDeferred<F> {
    handle: Handle,
    future: F,
}

impl<F> TokioDeferred<F>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    /// Wraps `future`, binding to the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::RuntimeUnavailable`] outside a Tokio runtime.
    pub fn try_new(future: F) -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|err| RippleError::runtime_unavailable(format!("TokioDeferred: {err}")))?;
        Ok(Self::with_handle(handle, future))
    }

    #[must_use]
    pub fn with_handle(handle: Handle, future: F) -> Self {
        Self { handle, future }
    }
}

impl<F> Deferred for TokioDeferred<F>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    type Output = F::Output;

    fn then(self, continuation: Continuation<F::Output>) {
        let future = self.future;
        self.handle.spawn(async move {
            continuation(future.await);
        });
    }
}
