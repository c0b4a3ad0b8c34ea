// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduler-driven operators for ripple push streams.
//!
//! Nothing in this crate reads a clock directly. Every operator takes a
//! [`Scheduler`](ripple_runtime::Scheduler), so the same pipeline runs on a
//! Tokio runtime or on a hand-driven
//! [`VirtualScheduler`](ripple_runtime::VirtualScheduler) in tests.
//!
//! # Overview
//!
//! - **[`interval`]** - repeating-timer factory
//! - **[`ThrottleTimeExt`]** - `.throttle_time(gap, &scheduler)`, leading-edge throttle
//! - **[`DebounceTimeExt`]** - `.debounce_time(gap, &scheduler)`, trailing debounce
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - re-enables `TokioScheduler` in `ripple-runtime`
//!
//! # Example
//!
//! ```rust,no_run
//! use ripple_runtime::TokioScheduler;
//! use ripple_stream_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let scheduler = TokioScheduler::try_current()?;
//! let ticks = interval(Duration::from_millis(5), &scheduler, |n| n)
//!     .debounce_time(DEFAULT_DEBOUNCE, &scheduler);
//!
//! ticks.subscribe(|tick, _| println!("settled on {tick}"));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod debounce_time;
pub mod interval;
pub mod prelude;
pub mod throttle_time;

pub use debounce_time::{DebounceTimeExt, DEFAULT_DEBOUNCE};
pub use interval::interval;
pub use throttle_time::ThrottleTimeExt;
