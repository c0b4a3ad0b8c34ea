// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the ripple workspace.
//!
//! Streams themselves carry no error channel: a panicking callback unwinds
//! straight into the caller of `next`, `subscribe` or `complete`. The errors
//! defined here are reported by the capability boundary instead, i.e. by
//! schedulers and deferred computations that need an async runtime.
//!
//! # Examples
//!
//! ```
//! use ripple_error::{Result, RippleError};
//!
//! fn spawn_timer() -> Result<()> {
//!     Err(RippleError::runtime_unavailable("no reactor running"))
//! }
//!
//! assert!(spawn_timer().is_err());
//! ```

/// Root error type for all ripple operations.
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// An async runtime was required but none is reachable from the caller.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// What needed the runtime
        context: String,
    },

    /// An operation was attempted on a capability in the wrong state.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },

    /// The producing side of a deferred computation was dropped before it
    /// resolved.
    #[error("Deferred computation dropped before resolving")]
    DeferredDropped,
}

impl RippleError {
    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Check if retrying the same call later could succeed.
    ///
    /// A missing runtime can appear once the caller is moved inside one; the
    /// other variants describe a consumed or abandoned one-shot.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RuntimeUnavailable { .. })
    }
}

/// Specialized Result type for ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;
