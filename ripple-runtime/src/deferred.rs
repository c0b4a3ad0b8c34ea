// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred-computation capability.
//!
//! A [`Deferred`] is a result that becomes available later. Consumers register
//! a single continuation with [`Deferred::then`]; it runs exactly once, when
//! the result is ready, or never if the producer goes away.
//!
//! [`promise`] builds the simplest implementation, resolved by hand:
//!
//! ```
//! use ripple_runtime::{promise, Deferred};
//! use std::sync::{Arc, Mutex};
//!
//! let (resolver, promise) = promise::<u32>();
//! let seen = Arc::new(Mutex::new(None));
//!
//! let slot = Arc::clone(&seen);
//! promise.then(Box::new(move |value| *slot.lock().unwrap() = Some(value)));
//!
//! resolver.resolve(7);
//! assert_eq!(*seen.lock().unwrap(), Some(7));
//! ```

use parking_lot::Mutex;
use ripple_error::{Result, RippleError};
use std::sync::Arc;

/// Continuation invoked with the resolved value.
pub type Continuation<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// A result supplied from outside the stream engine.
pub trait Deferred: Send + 'static {
    type Output: Send + 'static;

    /// Registers the continuation to run once the result is available.
    fn then(self, continuation: Continuation<Self::Output>);
}

enum PromiseState<T> {
    Pending(Option<Continuation<T>>),
    Resolved(T),
    Taken,
    Abandoned,
}

/// Consumer half of a manually resolved one-shot.
pub struct Promise<T> {
    state: Arc<Mutex<PromiseState<T>>>,
}

/// Producer half of a manually resolved one-shot.
///
/// Dropping it without calling [`resolve`](Resolver::resolve) leaves the
/// promise pending forever.
pub struct Resolver<T> {
    state: Arc<Mutex<PromiseState<T>>>,
}

/// Creates a connected resolver / promise pair.
#[must_use]
pub fn promise<T: Send + 'static>() -> (Resolver<T>, Promise<T>) {
    let state = Arc::new(Mutex::new(PromiseState::Pending(None)));
    (
        Resolver {
            state: Arc::clone(&state),
        },
        Promise { state },
    )
}

impl<T: Send + 'static> Resolver<T> {
    /// Resolves the promise. A registered continuation runs synchronously,
    /// on the caller's stack; otherwise the value is kept until one arrives.
    pub fn resolve(self, value: T) {
        let continuation = {
            let mut state = self.state.lock();
            match core::mem::replace(&mut *state, PromiseState::Taken) {
                PromiseState::Pending(Some(continuation)) => Some(continuation),
                PromiseState::Pending(None) => {
                    *state = PromiseState::Resolved(value);
                    return;
                }
                other => {
                    *state = other;
                    return;
                }
            }
        };

        if let Some(continuation) = continuation {
            continuation(value);
        }
    }
}

impl<T> Drop for Resolver<T> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if matches!(*state, PromiseState::Pending(_)) {
            *state = PromiseState::Abandoned;
        }
    }
}

impl<T: Send + 'static> Promise<T> {
    /// Returns `true` once a value is stored and not yet consumed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(*self.state.lock(), PromiseState::Resolved(_))
    }

    /// Takes the value without registering a continuation.
    ///
    /// `Ok(None)` while still pending.
    ///
    /// # Errors
    ///
    /// - [`RippleError::InvalidState`] if the value was already taken
    /// - [`RippleError::DeferredDropped`] if the resolver was dropped unresolved
    pub fn try_take(&self) -> Result<Option<T>> {
        let mut state = self.state.lock();
        match core::mem::replace(&mut *state, PromiseState::Taken) {
            PromiseState::Resolved(value) => Ok(Some(value)),
            PromiseState::Pending(continuation) => {
                *state = PromiseState::Pending(continuation);
                Ok(None)
            }
            PromiseState::Taken => Err(RippleError::invalid_state("promise value already taken")),
            PromiseState::Abandoned => {
                *state = PromiseState::Abandoned;
                Err(RippleError::DeferredDropped)
            }
        }
    }
}

impl<T: Send + 'static> Deferred for Promise<T> {
    type Output = T;

    fn then(self, continuation: Continuation<T>) {
        let value = {
            let mut state = self.state.lock();
            match core::mem::replace(&mut *state, PromiseState::Taken) {
                PromiseState::Resolved(value) => value,
                PromiseState::Pending(_) => {
                    *state = PromiseState::Pending(Some(continuation));
                    return;
                }
                other => {
                    *state = other;
                    return;
                }
            }
        };

        continuation(value);
    }
}
