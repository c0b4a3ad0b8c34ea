// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composition operators for ripple push streams.
//!
//! Every operator is an extension trait implemented for
//! [`Stream<T>`](ripple_core::Stream). Operators never modify their source;
//! each returns a new, inert derived stream.
//!
//! # Architecture
//!
//! - **Lazy wiring**: a derived stream subscribes its upstream from a `once`
//!   activation handler, so the upstream is subscribed a single time, on the
//!   first subscription to the derived stream, however many subscribers it
//!   gets afterwards.
//! - **Completion propagation**: every derived stream completes when its
//!   upstream does (or, for multi-source operators, as documented on the
//!   operator). Folding operators emit their result right before completing.
//! - **Release on completion**: the upstream registrations of a derived stream
//!   are removed as soon as it completes, so a finished operator never
//!   receives another value.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)**: transform each value
//! - **[`switch_map`](SwitchMapExt::switch_map)**: flatten projected inner streams
//!
//! ### Filtering and gating
//!
//! - **[`filter`](FilterExt::filter)**: keep values matching a predicate
//! - **[`take`](TakeExt::take)** / **[`take_and_complete`](TakeExt::take_and_complete)**: first `n` values
//! - **[`until`](UntilExt::until)**: drop values until a condition matched once
//! - **[`throttle`](ThrottleExt::throttle)**: one value per gate emission
//!
//! ### Aggregation
//!
//! - **[`reduce`](ReduceExt::reduce)**: fold, emitted on completion
//! - **[`count`](CountExt::count)**: running count
//! - **[`to_array`](ToArrayExt::to_array)**: collect, emitted on completion
//!
//! ### Combination
//!
//! - **[`concat`](ConcatExt::concat)**: one stream after the other
//! - **[`merge`](MergeExt::merge)**: interleave two streams
//! - **[`zip`](ZipExt::zip)**: lock-step tuples of several streams
//!
//! ### Extraction
//!
//! - **[`run`](RunExt::run)**: synchronous last value
//! - **[`last_value`](LastValueExt::last_value)**: future of the value before completion
//!
//! Time-based operators (`interval`, `throttle_time`, `debounce_time`) live in
//! `ripple-stream-time`.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_stream::prelude::*;
//!
//! let source: Stream<i32> = (1..=6).collect();
//! let result = source
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * 10)
//!     .to_array()
//!     .run();
//!
//! assert_eq!(result, Some(vec![20, 40, 60]));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;
mod link;

pub mod concat;
pub mod count;
pub mod filter;
pub mod last_value;
pub mod map;
pub mod merge;
pub mod merge_record;
pub mod prelude;
pub mod reduce;
pub mod run;
pub mod switch_map;
pub mod take;
pub mod throttle;
pub mod to_array;
pub mod until;
pub mod zip;

pub use concat::ConcatExt;
pub use count::CountExt;
pub use filter::FilterExt;
pub use last_value::LastValueExt;
pub use map::MapExt;
pub use merge::MergeExt;
pub use merge_record::{MergeRecord, Merged};
pub use reduce::ReduceExt;
pub use run::RunExt;
pub use switch_map::SwitchMapExt;
pub use take::TakeExt;
pub use throttle::ThrottleExt;
pub use to_array::ToArrayExt;
pub use until::UntilExt;
pub use zip::ZipExt;
