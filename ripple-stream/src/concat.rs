// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat operator - plays two streams one after the other.
//!
//! Values of `self` come out as [`Merged::Left`] records. When `self`
//! completes, `other` is subscribed and its values continue as
//! [`Merged::Right`] records. Combined indices run on across the switch.
//! The result completes when `other` completes.
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_stream::{ConcatExt, RunExt, ToArrayExt};
//!
//! let first: Stream<i32> = [1, 2].into_iter().collect();
//! let second: Stream<i32> = [3, 4].into_iter().collect();
//!
//! let records = first.concat(&second).to_array().run().unwrap_or_default();
//! let values: Vec<i32> = records.into_iter().map(|r| r.value.into_inner()).collect();
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! ```

use crate::link::{complete_with, lazy};
use crate::merge_record::{MergeRecord, Merged};
use ripple_core::{Stream, StreamValue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `concat` operator.
pub trait ConcatExt<T: StreamValue> {
    /// Emits every value of `self`, then every value of `other`.
    fn concat<K: StreamValue>(&self, other: &Stream<K>) -> Stream<MergeRecord<T, K>>;
}

impl<T: StreamValue> ConcatExt<T> for Stream<T> {
    fn concat<K: StreamValue>(&self, other: &Stream<K>) -> Stream<MergeRecord<T, K>> {
        let first = self.clone();
        let second = other.clone();

        let derived = lazy(move |derived: &Stream<MergeRecord<T, K>>| {
            let combined = Arc::new(AtomicUsize::new(0));

            let weak = derived.downgrade();
            let second = second.clone();
            let next_combined = Arc::clone(&combined);
            first.on_completed(move || {
                let Some(derived) = weak.upgrade() else {
                    return;
                };
                let target = derived.clone();
                let source_id = second.id();
                second.subscribe_for(&derived, move |value, source_index| {
                    target.next(MergeRecord {
                        value: Merged::Right(value.clone()),
                        source_id,
                        source_index,
                        combined_index: next_combined.fetch_add(1, Ordering::SeqCst),
                    });
                });
            });

            let target = derived.clone();
            let source_id = first.id();
            first.subscribe_for(derived, move |value, source_index| {
                target.next(MergeRecord {
                    value: Merged::Left(value.clone()),
                    source_id,
                    source_index,
                    combined_index: combined.fetch_add(1, Ordering::SeqCst),
                });
            });
        });

        complete_with(other, &derived);
        derived
    }
}
