// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous terminal extraction.
//!
//! [`last_value`](LastValueExt::last_value) bridges a push stream into
//! `async` code: the returned future resolves when the stream completes.
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_stream::LastValueExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source: Stream<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(source.last_value().await, Some(3));
//! # }
//! ```
//!
//! There is no timeout: a stream that never completes yields a future that
//! never resolves. Wrap it with the runtime's timeout if needed.

use futures::channel::oneshot;
use futures::future::{self, Either};
use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use std::future::Future;
use std::sync::Arc;

/// Extension trait providing the `last_value` terminal.
pub trait LastValueExt<T: StreamValue> {
    /// Subscribes and returns a future of the last value observed before
    /// completion.
    ///
    /// Resolves with `None` if the stream completes without emitting after
    /// this call. On an already completed stream it resolves immediately with
    /// the current value.
    fn last_value(&self) -> impl Future<Output = Option<T>> + Send + 'static;
}

impl<T: StreamValue> LastValueExt<T> for Stream<T> {
    fn last_value(&self) -> impl Future<Output = Option<T>> + Send + 'static {
        if self.is_completed() {
            return Either::Left(future::ready(self.value()));
        }

        let (sender, receiver) = oneshot::channel();
        let last = Arc::new(Mutex::new(None));

        let observed = Arc::clone(&last);
        self.on_completed(move || {
            let value = observed.lock().take();
            let _ = sender.send(value);
        });

        let sink = Arc::clone(&last);
        self.subscribe(move |value, _| *sink.lock() = Some(value.clone()));

        Either::Right(async move {
            match receiver.await {
                Ok(value) => value,
                // Stream dropped without completing.
                Err(oneshot::Canceled) => future::pending().await,
            }
        })
    }
}
