// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capabilities injected into ripple streams by their environment.
//!
//! The stream core never touches a platform clock or an executor directly.
//! Operators that need time receive a [`Scheduler`], and factories that wrap an
//! asynchronous result receive a [`Deferred`].
//!
//! - [`VirtualScheduler`] - deterministic timer queue driven by hand, for
//!   single-threaded programs and tests
//! - `TokioScheduler` / `TokioDeferred` - Tokio-backed implementations
//!   (feature `runtime-tokio`, enabled by default)
//! - [`promise`] - manually resolved one-shot

pub mod deferred;
pub mod impls;
pub mod scheduler;
pub mod timer;
pub mod virtual_scheduler;

pub use deferred::{promise, Continuation, Deferred, Promise, Resolver};
pub use scheduler::{RepeatingTask, Scheduler, Task, TimerHandle, MIN_TIMER_GRANULARITY};
pub use timer::Timer;
pub use virtual_scheduler::VirtualScheduler;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioDeferred, TokioScheduler, TokioTimer};
