// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch-map operator - flattens a stream of projected inner streams.
//!
//! Every upstream value is projected to an inner stream, which gets
//! subscribed and forwarded. Inner streams projected earlier are **not**
//! canceled, so their emissions interleave with the newer ones.
//!
//! The derived stream completes when the outer stream completes; inner
//! completions are not forwarded. An inner subscription is released when its
//! inner stream completes, and every one still running is released when the
//! derived stream completes.

use crate::link::{complete_with, lazy};
use parking_lot::Mutex;
use ripple_core::{Stream, StreamId, StreamValue, SubscriberToken, Subscription};
use std::sync::Arc;

/// Inner subscriptions still running, keyed by stream and token.
type Live = Arc<Mutex<Vec<Subscription>>>;

fn key_of(subscription: &Subscription) -> (StreamId, SubscriberToken) {
    (subscription.stream_id(), subscription.token())
}

/// Extension trait providing the `switch_map` operator.
pub trait SwitchMapExt<T: StreamValue> {
    /// Subscribes `project(&value)` for every upstream value and forwards all
    /// of its emissions.
    fn switch_map<U, F>(&self, project: F) -> Stream<U>
    where
        U: StreamValue,
        F: Fn(&T) -> Stream<U> + Send + Sync + 'static;
}

impl<T: StreamValue> SwitchMapExt<T> for Stream<T> {
    fn switch_map<U, F>(&self, project: F) -> Stream<U>
    where
        U: StreamValue,
        F: Fn(&T) -> Stream<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let project = Arc::new(project);

        let derived = lazy(move |derived: &Stream<U>| {
            let live: Live = Arc::new(Mutex::new(Vec::new()));

            let draining = Arc::clone(&live);
            derived.on_completed(move || {
                let inner: Vec<Subscription> = core::mem::take(&mut *draining.lock());
                for subscription in inner {
                    subscription.unsubscribe();
                }
            });

            let outer_target = derived.clone();
            let project = Arc::clone(&project);
            upstream.subscribe_for(derived, move |value, _| {
                if outer_target.is_completed() {
                    return;
                }
                let inner = project(value);
                let target = outer_target.clone();
                let subscription = inner.subscribe(move |inner_value, _| {
                    target.next(inner_value.clone());
                });
                if inner.is_completed() || outer_target.is_completed() {
                    subscription.unsubscribe();
                    return;
                }

                let key = key_of(&subscription);
                live.lock().push(subscription);

                let pruned = Arc::downgrade(&live);
                inner.on_completed(move || {
                    if let Some(live) = pruned.upgrade() {
                        live.lock().retain(|running| key_of(running) != key);
                    }
                });
            });
        });

        complete_with(self, &derived);
        derived
    }
}
