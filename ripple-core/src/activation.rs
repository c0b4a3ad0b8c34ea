// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// Logic deferred until a stream gets subscribed.
pub type ActivationHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Whether an activation handler has run at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationState {
    NotFired,
    Fired,
}

pub(crate) struct Activation {
    handler: ActivationHandler,
    once: bool,
    state: ActivationState,
}

impl Activation {
    pub(crate) fn new(handler: ActivationHandler, once: bool) -> Self {
        Self {
            handler,
            once,
            state: ActivationState::NotFired,
        }
    }

    /// Moves to `Fired` and hands out the handler, unless it is a `once`
    /// handler that already fired.
    pub(crate) fn trigger(&mut self) -> Option<ActivationHandler> {
        if self.once && self.state == ActivationState::Fired {
            return None;
        }
        self.state = ActivationState::Fired;
        Some(Arc::clone(&self.handler))
    }
}
