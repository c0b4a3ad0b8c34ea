// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Requirements for values carried by a [`Stream`](crate::Stream).
///
/// A stream keeps a copy of its latest value and hands the same emission to
/// every subscriber, possibly from a timer thread, hence:
///
/// - `Clone` - the current value is stored alongside delivery
/// - `Send + Sync + 'static` - callbacks and handles may cross threads
pub trait StreamValue: Clone + Send + Sync + 'static {}

/// Blanket implementation for all types satisfying the requirements.
impl<T> StreamValue for T where T: Clone + Send + Sync + 'static {}
