// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator - positional lock-step pairing of several streams.
//!
//! Every source owns one pending slot. A value fills its source's slot,
//! overwriting a value that was not consumed yet. As soon as every slot is
//! filled, the values are emitted together as a `Vec` in source order
//! (`self` first) and all slots are cleared.
//!
//! The zipped stream completes as soon as **any** source completes.
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_stream::ZipExt;
//! use std::sync::{Arc, Mutex};
//!
//! let a = Stream::<i32>::new();
//! let b = Stream::<i32>::new();
//! let zipped = a.zip(&[b.clone()]);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! zipped.subscribe(move |tuple, _| sink.lock().unwrap().push(tuple.clone()));
//!
//! a.next(1);
//! a.next(2);
//! b.next(10);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![vec![2, 10]]);
//! ```

use crate::link::{complete_with, lazy};
use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue};
use std::sync::Arc;

/// Extension trait providing the `zip` operator.
pub trait ZipExt<T: StreamValue> {
    /// Zips `self` with `others`. With no `others`, every value comes out as a
    /// one-element `Vec`.
    fn zip(&self, others: &[Stream<T>]) -> Stream<Vec<T>>;
}

impl<T: StreamValue> ZipExt<T> for Stream<T> {
    fn zip(&self, others: &[Stream<T>]) -> Stream<Vec<T>> {
        let sources: Vec<Stream<T>> = core::iter::once(self.clone())
            .chain(others.iter().cloned())
            .collect();
        let wired = sources.clone();

        let derived = lazy(move |derived: &Stream<Vec<T>>| {
            let slots = Arc::new(Mutex::new(vec![None; wired.len()]));

            for (position, source) in wired.iter().enumerate() {
                // A synchronous source may already have completed the zip.
                if derived.is_completed() {
                    break;
                }
                let target = derived.clone();
                let slots = Arc::clone(&slots);
                source.subscribe_for(derived, move |value, _| {
                    let ready = {
                        let mut slots = slots.lock();
                        slots[position] = Some(value.clone());
                        if slots.iter().all(Option::is_some) {
                            Some(slots.iter_mut().filter_map(Option::take).collect::<Vec<T>>())
                        } else {
                            None
                        }
                    };

                    if let Some(tuple) = ready {
                        target.next(tuple);
                    }
                });
            }
        });

        for source in &sources {
            complete_with(source, &derived);
        }
        derived
    }
}
