// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator - interleaves two streams as they emit.
//!
//! Records carry the id and per-source index of the stream that produced
//! them, plus a combined index in arrival order. The merged stream completes
//! only after **both** sources completed. Completion is tracked by a private
//! auxiliary stream that receives one tick per finished source and is piped
//! through `count()` and `filter(== 2)`.
//!
//! # See Also
//!
//! - [`ConcatExt::concat`](crate::ConcatExt::concat) - sequential instead of
//!   interleaved

use crate::count::CountExt;
use crate::filter::FilterExt;
use crate::link::lazy;
use crate::merge_record::{MergeRecord, Merged};
use ripple_core::{Stream, StreamValue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const SOURCES: usize = 2;

/// Extension trait providing the `merge` operator.
pub trait MergeExt<T: StreamValue> {
    /// Interleaves `self` (as [`Merged::Left`]) with `other` (as
    /// [`Merged::Right`]).
    fn merge<K: StreamValue>(&self, other: &Stream<K>) -> Stream<MergeRecord<T, K>>;
}

impl<T: StreamValue> MergeExt<T> for Stream<T> {
    fn merge<K: StreamValue>(&self, other: &Stream<K>) -> Stream<MergeRecord<T, K>> {
        let left = self.clone();
        let right = other.clone();

        let derived = lazy(move |derived: &Stream<MergeRecord<T, K>>| {
            let combined = Arc::new(AtomicUsize::new(0));

            let target = derived.clone();
            let next_combined = Arc::clone(&combined);
            let source_id = left.id();
            left.subscribe_for(derived, move |value, source_index| {
                target.next(MergeRecord {
                    value: Merged::Left(value.clone()),
                    source_id,
                    source_index,
                    combined_index: next_combined.fetch_add(1, Ordering::SeqCst),
                });
            });

            let target = derived.clone();
            let source_id = right.id();
            right.subscribe_for(derived, move |value, source_index| {
                target.next(MergeRecord {
                    value: Merged::Right(value.clone()),
                    source_id,
                    source_index,
                    combined_index: combined.fetch_add(1, Ordering::SeqCst),
                });
            });
        });

        let finished = Stream::<()>::new();
        for_each_completion(self, other, &finished);

        let weak = derived.downgrade();
        let aux = finished.clone();
        finished
            .count()
            .filter(|done| *done == SOURCES)
            .subscribe(move |_, _| {
                aux.complete();
                if let Some(derived) = weak.upgrade() {
                    debug!("merge: both sources of {} completed", derived.id());
                    derived.complete();
                }
            });

        derived
    }
}

fn for_each_completion<T, K>(left: &Stream<T>, right: &Stream<K>, finished: &Stream<()>)
where
    T: StreamValue,
    K: StreamValue,
{
    let tick = finished.clone();
    left.on_completed(move || tick.next(()));
    let tick = finished.clone();
    right.on_completed(move || tick.next(()));
}
