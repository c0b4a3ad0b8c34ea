// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! A single-value, push-based reactive stream primitive.
//!
//! ## Overview
//!
//! A [`Stream<T>`] carries zero or more values followed by at most one
//! completion. Values are pushed with [`Stream::next`] and delivered
//! synchronously to every subscriber, in registration order, tagged with a
//! per-stream emission index. Derived streams built by the operators are
//! inert until their first subscription, which subscribes the upstream once.
//!
//! ## Crates
//!
//! - `ripple-core` - [`Stream`], [`Subscription`] and the construction helpers
//! - `ripple-stream` - value operators (`map`, `filter`, `take`, `merge`, ..)
//! - `ripple-stream-time` - scheduler-driven operators (`interval`,
//!   `throttle_time`, `debounce_time`)
//! - `ripple-runtime` - the [`Scheduler`] and [`Deferred`] capabilities
//! - `ripple-error` - [`RippleError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let doubled = Stream::from_iter([10, 20, 30]).map(|v| v * 2).to_array();
//! assert_eq!(doubled.run(), Some(vec![20, 40, 60]));
//! ```
//!
//! Time-based operators take the scheduler explicitly:
//!
//! ```rust
//! use ripple::prelude::*;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let source = Stream::<u32>::new();
//! let settled = source.debounce_time(Duration::from_millis(50), &scheduler);
//! let last = settled.to_array();
//! last.subscribe(|values, _| assert_eq!(values, &vec![3]));
//!
//! source.next(1);
//! source.next(2);
//! source.next(3);
//! scheduler.advance(Duration::from_millis(50));
//! source.complete();
//! ```

pub use ripple_core::{Stream, StreamId, StreamValue, Subscriber, Subscription, WeakStream};
pub use ripple_error::{Result, RippleError};
pub use ripple_runtime::{promise, Deferred, Promise, Resolver, Scheduler, TimerHandle, VirtualScheduler};
pub use ripple_stream::{MergeRecord, Merged};

#[cfg(feature = "runtime-tokio")]
pub use ripple_runtime::{TokioDeferred, TokioScheduler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use ripple_core::{Stream, StreamValue, Subscription};
    pub use ripple_runtime::{promise, Deferred, Scheduler, VirtualScheduler};
    pub use ripple_stream::prelude::*;
    pub use ripple_stream_time::prelude::*;

    #[cfg(feature = "runtime-tokio")]
    pub use ripple_runtime::{TokioDeferred, TokioScheduler};
}
