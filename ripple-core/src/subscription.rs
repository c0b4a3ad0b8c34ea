// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::stream_id::StreamId;
use core::fmt::{self, Debug};
use std::sync::{Arc, Weak};

/// Callback receiving each emitted value and its emission index.
pub type Subscriber<T> = Arc<dyn Fn(&T, usize) + Send + Sync + 'static>;

/// Opaque key of one registration in a stream's subscriber registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberToken(u64);

impl SubscriberToken {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }
}

pub(crate) trait TokenRegistry: Send + Sync {
    fn remove(&self, token: SubscriberToken) -> bool;

    fn contains(&self, token: SubscriberToken) -> bool;
}

/// Handle returned by [`Stream::subscribe`](crate::Stream::subscribe).
///
/// Dropping it keeps the subscription alive; removal is explicit through
/// [`unsubscribe`](Subscription::unsubscribe).
pub struct Subscription {
    token: SubscriberToken,
    stream: StreamId,
    registry: Weak<dyn TokenRegistry>,
}

impl Subscription {
    pub(crate) fn new(token: SubscriberToken, stream: StreamId, registry: Weak<dyn TokenRegistry>) -> Self {
        Self {
            token,
            stream,
            registry,
        }
    }

    #[must_use]
    pub const fn token(&self) -> SubscriberToken {
        self.token
    }

    /// Id of the stream this subscription belongs to.
    #[must_use]
    pub const fn stream_id(&self) -> StreamId {
        self.stream
    }

    /// Returns `true` while the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.token))
    }

    /// Removes exactly this registration. Returns `false` if it was already
    /// gone (unsubscribed, cleared by completion, or stream dropped).
    pub fn unsubscribe(self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.remove(self.token))
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token)
            .field("stream", &self.stream)
            .finish()
    }
}

pub(crate) fn registry_of<R>(registry: &Arc<R>) -> Weak<dyn TokenRegistry>
where
    R: TokenRegistry + 'static,
{
    let weak: Weak<R> = Arc::downgrade(registry);
    weak
}
