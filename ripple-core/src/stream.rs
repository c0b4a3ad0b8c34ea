// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-based stream primitive.
//!
//! A [`Stream`] holds its latest value, a completion flag and three ordered
//! registries: subscribers, activation handlers and completion handlers.
//!
//! ## Characteristics
//!
//! - **Lazy**: activation handlers run when a subscriber arrives, which is how
//!   a derived stream starts pulling from its upstream.
//! - **Synchronous**: `next` calls every subscriber before returning.
//! - **Reentrant**: no lock is held while callbacks run, and delivery
//!   iterates a snapshot of the subscribers taken when the emission starts.
//! - **Shared**: cheap to clone; all clones share the same state.
//! - **Fail-fast**: a panicking callback unwinds into the caller of `next`,
//!   `subscribe` or `complete`; later subscribers miss that emission.
//!
//! ## Example
//!
//! ```
//! use ripple_core::Stream;
//! use std::sync::{Arc, Mutex};
//!
//! let stream = Stream::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let subscription = stream.subscribe(move |value, index| sink.lock().unwrap().push((*value, index)));
//!
//! stream.next(1);
//! stream.next(2);
//! subscription.unsubscribe();
//! stream.next(3);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![(1, 0), (2, 1)]);
//! ```

use crate::activation::{Activation, ActivationHandler};
use crate::stream_id::StreamId;
use crate::stream_value::StreamValue;
use crate::subscription::{registry_of, Subscriber, SubscriberToken, Subscription, TokenRegistry};
use core::fmt::{self, Debug};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type CompletionHandler = Box<dyn FnOnce() + Send + 'static>;

struct StreamState<T> {
    value: Option<T>,
    completed: bool,
    emission_index: usize,
    next_token: u64,
    subscribers: Vec<(SubscriberToken, Subscriber<T>)>,
    activations: Vec<Activation>,
    completion_handlers: Vec<CompletionHandler>,
}

impl<T> StreamState<T> {
    const fn new() -> Self {
        Self {
            value: None,
            completed: false,
            emission_index: 0,
            next_token: 0,
            subscribers: Vec::new(),
            activations: Vec::new(),
            completion_handlers: Vec::new(),
        }
    }
}

impl<T: StreamValue> TokenRegistry for Mutex<StreamState<T>> {
    fn remove(&self, token: SubscriberToken) -> bool {
        let mut state = self.lock();
        let before = state.subscribers.len();
        state.subscribers.retain(|(existing, _)| *existing != token);
        state.subscribers.len() != before
    }

    fn contains(&self, token: SubscriberToken) -> bool {
        self.lock()
            .subscribers
            .iter()
            .any(|(existing, _)| *existing == token)
    }
}

/// A single-value, push-based stream.
///
/// See the [module documentation](crate::stream) for the delivery model.
pub struct Stream<T: StreamValue> {
    id: StreamId,
    state: Arc<Mutex<StreamState<T>>>,
}

/// Non-owning reference to a [`Stream`], used by handlers that must not keep
/// their own stream alive.
pub struct WeakStream<T: StreamValue> {
    id: StreamId,
    state: Weak<Mutex<StreamState<T>>>,
}

impl<T: StreamValue> Stream<T> {
    /// Creates an inert stream with no value and no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: StreamId::next(),
            state: Arc::new(Mutex::new(StreamState::new())),
        }
    }

    /// Creates a stream whose current value is already `value`.
    ///
    /// The seed counts as emission 0, delivered to nobody.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        let stream = Self::new();
        stream.next(value);
        stream
    }

    #[must_use]
    pub const fn id(&self) -> StreamId {
        self.id
    }

    /// Last value delivered, if any.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.state.lock().value.clone()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.lock().completed
    }

    /// Number of `next` calls so far; also the index the next emission gets.
    #[must_use]
    pub fn emission_count(&self) -> usize {
        self.state.lock().emission_index
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    /// Number of completion handlers waiting for this stream to complete.
    #[must_use]
    pub fn completion_handler_count(&self) -> usize {
        self.state.lock().completion_handlers.len()
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakStream<T> {
        WeakStream {
            id: self.id,
            state: Arc::downgrade(&self.state),
        }
    }

    /// Stores `value` and delivers it to every current subscriber, in
    /// registration order, all with the same emission index.
    ///
    /// Operators never call this on a completed stream; doing so is logged.
    pub fn next(&self, value: T) {
        let (subscribers, index) = {
            let mut state = self.state.lock();
            if state.completed {
                warn!("{}: next called after completion", self.id);
            }
            let index = state.emission_index;
            state.emission_index += 1;
            state.value = Some(value.clone());
            let subscribers: Vec<Subscriber<T>> = state
                .subscribers
                .iter()
                .map(|(_, subscriber)| Arc::clone(subscriber))
                .collect();
            (subscribers, index)
        };

        for subscriber in subscribers {
            subscriber(&value, index);
        }
    }

    /// Completes the stream. Only the first call has an effect: completion
    /// handlers fire in registration order, then every subscriber is removed.
    pub fn complete(&self) {
        let handlers = {
            let mut state = self.state.lock();
            if state.completed {
                return;
            }
            state.completed = true;
            core::mem::take(&mut state.completion_handlers)
        };

        debug!("{}: completing ({} handlers)", self.id, handlers.len());
        for handler in handlers {
            handler();
        }

        self.state.lock().subscribers.clear();
    }

    /// Registers `callback`, then fires the activation handlers.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T, usize) + Send + Sync + 'static,
    {
        self.subscribe_callback(Arc::new(callback))
    }

    /// Same as [`subscribe`](Self::subscribe) with a caller-owned callback,
    /// whose identity can later be handed to [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe_callback(&self, callback: Subscriber<T>) -> Subscription {
        let (token, handlers) = {
            let mut state = self.state.lock();
            let token = SubscriberToken::new(state.next_token);
            state.next_token += 1;
            state.subscribers.push((token, callback));
            let handlers: Vec<ActivationHandler> = state
                .activations
                .iter_mut()
                .filter_map(Activation::trigger)
                .collect();
            (token, handlers)
        };

        if !handlers.is_empty() {
            debug!("{}: activating ({} handlers)", self.id, handlers.len());
        }
        for handler in handlers {
            handler();
        }

        Subscription::new(token, self.id, registry_of(&self.state))
    }

    /// Subscribes on behalf of `derived`: the registration is released as soon
    /// as `derived` completes, so a finished operator stops receiving values.
    pub fn subscribe_for<U, F>(&self, derived: &Stream<U>, callback: F)
    where
        U: StreamValue,
        F: Fn(&T, usize) + Send + Sync + 'static,
    {
        let subscription = self.subscribe(callback);
        derived.on_completed(move || {
            subscription.unsubscribe();
        });
    }

    /// Removes every registration of `callback` (by identity), keeping the
    /// order of the remaining ones. Returns how many were removed.
    pub fn unsubscribe(&self, callback: &Subscriber<T>) -> usize {
        let target = Arc::as_ptr(callback).cast::<()>();
        let mut state = self.state.lock();
        let before = state.subscribers.len();
        state
            .subscribers
            .retain(|(_, subscriber)| Arc::as_ptr(subscriber).cast::<()>() != target);
        before - state.subscribers.len()
    }

    pub fn unsubscribe_all(&self) {
        self.state.lock().subscribers.clear();
    }

    /// Registers a handler fired on every subscription.
    pub fn on_subscribe<F>(&self, handler: F) -> &Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.push_activation(Arc::new(handler), false)
    }

    /// Registers a handler fired on the first subscription only.
    pub fn on_subscribe_once<F>(&self, handler: F) -> &Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.push_activation(Arc::new(handler), true)
    }

    fn push_activation(&self, handler: ActivationHandler, once: bool) -> &Self {
        self.state
            .lock()
            .activations
            .push(Activation::new(handler, once));
        self
    }

    /// Registers a completion handler. On an already completed stream the
    /// handler runs immediately.
    pub fn on_completed<F>(&self, handler: F) -> &Self
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        if state.completed {
            drop(state);
            handler();
        } else {
            state.completion_handlers.push(Box::new(handler));
        }
        self
    }
}

impl<T: StreamValue> WeakStream<T> {
    #[must_use]
    pub fn upgrade(&self) -> Option<Stream<T>> {
        self.state.upgrade().map(|state| Stream { id: self.id, state })
    }
}

impl<T: StreamValue> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StreamValue> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: StreamValue> Clone for WeakStream<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Weak::clone(&self.state),
        }
    }
}

impl<T: StreamValue> Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Stream")
            .field("id", &self.id)
            .field("completed", &state.completed)
            .field("emissions", &state.emission_index)
            .field("subscribers", &state.subscribers.len())
            .field("completion_handlers", &state.completion_handlers.len())
            .finish()
    }
}
