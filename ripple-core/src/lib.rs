// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core of the ripple reactive primitive.
//!
//! - [`Stream`] - the push-based stream with lazy activation and completion
//! - [`Subscription`] - explicit handle removing one subscriber
//! - [`StreamId`] - provenance tag used by merging operators
//! - [`StreamValue`] - bounds every carried value satisfies
//!
//! Operators live in `ripple-stream` and `ripple-stream-time`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod activation;
pub mod sources;
pub mod stream;
pub mod stream_id;
pub mod stream_value;
pub mod subscription;

pub use self::activation::{ActivationHandler, ActivationState};
pub use self::stream::{Stream, WeakStream};
pub use self::stream_id::StreamId;
pub use self::stream_value::StreamValue;
pub use self::subscription::{Subscriber, SubscriberToken, Subscription};
