// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ripple reactive primitive.
//!
//! This crate is for development and testing only.
//!
//! # Key Types
//!
//! ## `Recorder<T>`
//!
//! Subscribes to a stream and keeps every emission together with its index,
//! plus whether the stream completed:
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_test_utils::Recorder;
//!
//! let stream = Stream::new();
//! let recorder = Recorder::attach(&stream);
//!
//! stream.next("a");
//! stream.next("b");
//! stream.complete();
//!
//! assert_eq!(recorder.values(), vec!["a", "b"]);
//! assert_eq!(recorder.indices(), vec![0, 1]);
//! assert!(recorder.is_completed());
//! ```
//!
//! ## Fixtures
//!
//! [`test_data`] provides [`Reading`](test_data::Reading) values for
//! scenarios that need something richer than integers.
//!
//! # Module Organization
//!
//! - `recorder` - `Recorder<T>`
//! - `test_data` - `Reading` fixtures
//! - `helpers` - assertion and collection helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use helpers::{assert_completed, assert_not_completed, collect_sync};
pub use recorder::Recorder;
pub use test_data::Reading;
