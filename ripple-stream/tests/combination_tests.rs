// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::Stream;
use ripple_stream::{ConcatExt, MergeExt, Merged, RunExt, ToArrayExt, ZipExt};
use ripple_test_utils::test_data::{reading_kitchen, Reading};
use ripple_test_utils::Recorder;

#[test]
fn test_concat_finite_sequences() {
    // Arrange
    let first: Stream<i32> = [1, 2].into_iter().collect();
    let second: Stream<i32> = [3, 4].into_iter().collect();

    // Act
    let records = first.concat(&second).to_array().run().unwrap_or_default();

    // Assert
    let values: Vec<i32> = records.iter().map(|r| r.value.clone().into_inner()).collect();
    let source_indices: Vec<usize> = records.iter().map(|r| r.source_index).collect();
    let combined: Vec<usize> = records.iter().map(|r| r.combined_index).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(source_indices, vec![0, 1, 0, 1]);
    assert_eq!(combined, vec![0, 1, 2, 3]);
    assert_eq!(records[0].source_id, first.id());
    assert_eq!(records[2].source_id, second.id());
}

#[test]
fn test_concat_never_emits_second_before_first_completed() {
    // Arrange
    let first = Stream::<i32>::new();
    let second = Stream::<&str>::new();
    let concatenated = first.concat(&second);
    let recorder = Recorder::attach(&concatenated);

    // Act
    second.next("early");
    first.next(1);
    first.complete();
    second.next("late");

    // Assert
    let values: Vec<Merged<i32, &str>> = recorder.values().into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec![Merged::Left(1), Merged::Right("late")]);
    assert!(!recorder.is_completed());

    second.complete();
    assert!(recorder.is_completed());
}

#[test]
fn test_concat_first_completion_alone_does_not_complete() {
    let first = Stream::<i32>::new();
    let second = Stream::<i32>::new();
    let recorder = Recorder::attach(&first.concat(&second));

    first.complete();

    assert!(!recorder.is_completed());
    assert_eq!(second.subscriber_count(), 1);
}

#[test]
fn test_merge_interleaves_with_own_source_ids() {
    // Arrange
    let numbers = Stream::<i32>::new();
    let readings = Stream::<Reading>::new();
    let merged = numbers.merge(&readings);
    let recorder = Recorder::attach(&merged);

    // Act
    numbers.next(1);
    readings.next(reading_kitchen());
    numbers.next(2);

    // Assert
    let records = recorder.values();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].value, Merged::Left(1));
    assert_eq!(records[1].value, Merged::Right(reading_kitchen()));
    assert_eq!(records[2].value, Merged::Left(2));
    assert_eq!(records[1].source_id, readings.id());
    assert_eq!(records[2].source_id, numbers.id());
    assert_eq!(
        records.iter().map(|r| r.source_index).collect::<Vec<_>>(),
        vec![0, 0, 1]
    );
    assert_eq!(
        records.iter().map(|r| r.combined_index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_merge_completes_only_after_both_sources() {
    // Arrange
    let left = Stream::<i32>::new();
    let right = Stream::<i32>::new();
    let merged = left.merge(&right);
    let recorder = Recorder::attach(&merged);

    // Act
    left.complete();
    assert!(!recorder.is_completed());
    right.next(9);
    right.complete();

    // Assert
    assert!(recorder.is_completed());
    assert_eq!(recorder.values()[0].value.clone().into_inner(), 9);
}

#[test]
fn test_merge_of_finite_sequences_collects_everything() {
    let left: Stream<i32> = [1, 2].into_iter().collect();
    let right: Stream<i32> = [3].into_iter().collect();

    let records = left.merge(&right).to_array().run().unwrap_or_default();

    let values: Vec<i32> = records.into_iter().map(|r| r.value.into_inner()).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_zip_emits_only_when_every_source_produced() {
    // Arrange
    let a = Stream::<i32>::new();
    let b = Stream::<i32>::new();
    let c = Stream::<i32>::new();
    let zipped = a.zip(&[b.clone(), c.clone()]);
    let recorder = Recorder::attach(&zipped);

    // Act
    a.next(1);
    b.next(2);
    assert!(recorder.is_empty());
    c.next(3);
    b.next(20);
    c.next(30);
    a.next(10);

    // Assert
    assert_eq!(recorder.values(), vec![vec![1, 2, 3], vec![10, 20, 30]]);
}

#[test]
fn test_zip_overwrites_unconsumed_slot() {
    let a = Stream::<i32>::new();
    let b = Stream::<i32>::new();
    let recorder = Recorder::attach(&a.zip(&[b.clone()]));

    b.next(1);
    b.next(2);
    a.next(0);

    assert_eq!(recorder.values(), vec![vec![0, 2]]);
}

#[test]
fn test_zip_completes_when_any_source_completes() {
    let a = Stream::<i32>::new();
    let b = Stream::<i32>::new();
    let recorder = Recorder::attach(&a.zip(&[b.clone()]));

    b.complete();
    a.next(1);

    assert!(recorder.is_completed());
    assert_eq!(a.subscriber_count(), 0);
}

#[test]
fn test_zip_without_others_wraps_each_value() {
    let a: Stream<i32> = [4, 5].into_iter().collect();

    let tuples = a.zip(&[]).to_array().run();

    assert_eq!(tuples, Some(vec![vec![4], vec![5]]));
}

#[test]
fn test_zip_of_synchronous_sources_completes_with_first() {
    let a: Stream<i32> = [1, 2].into_iter().collect();
    let b: Stream<i32> = [3, 4].into_iter().collect();

    let tuples = a.zip(&[b.clone()]).to_array().run();

    assert_eq!(tuples, Some(Vec::new()));
    assert_eq!(b.emission_count(), 0);
}
