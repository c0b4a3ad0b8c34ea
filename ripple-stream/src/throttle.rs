// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle operator - samples a stream on the ticks of a gate stream.
//!
//! The first value passes and closes the throttle. Each gate emission reopens
//! it for exactly one more value; values arriving while closed are dropped.
//! The gate is subscribed lazily, when the first value passes.
//!
//! The derived stream completes when either the upstream or the gate
//! completes.
//!
//! # See Also
//!
//! - `ThrottleTimeExt::throttle_time` in `ripple-stream-time` - time-based
//!   variant driven by a scheduler

use crate::link::{complete_with, lazy};
use ripple_core::{Stream, StreamValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Extension trait providing the `throttle` operator.
pub trait ThrottleExt<T: StreamValue> {
    /// Lets one value through per emission of `gate`, starting open.
    fn throttle<G: StreamValue>(&self, gate: &Stream<G>) -> Stream<T>;
}

impl<T: StreamValue> ThrottleExt<T> for Stream<T> {
    fn throttle<G: StreamValue>(&self, gate: &Stream<G>) -> Stream<T> {
        let upstream = self.clone();
        let sampler = gate.clone();

        let derived = lazy(move |derived: &Stream<T>| {
            let open = Arc::new(AtomicBool::new(true));
            let gate_subscribed = AtomicBool::new(false);
            let target = derived.clone();
            let sampler = sampler.clone();

            upstream.subscribe_for(derived, move |value, _| {
                if !open.swap(false, Ordering::SeqCst) {
                    return;
                }
                target.next(value.clone());

                if !gate_subscribed.swap(true, Ordering::SeqCst) {
                    let reopen = Arc::clone(&open);
                    sampler.subscribe_for(&target, move |_, _| reopen.store(true, Ordering::SeqCst));
                }
            });
        });

        complete_with(self, &derived);
        complete_with(gate, &derived);
        derived
    }
}
