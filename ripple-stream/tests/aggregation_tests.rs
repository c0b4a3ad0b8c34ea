// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::Stream;
use ripple_stream::{CountExt, ReduceExt, RunExt, ToArrayExt};
use ripple_test_utils::test_data::{reading_attic, reading_cellar, reading_garage, Reading};
use ripple_test_utils::Recorder;

#[test]
fn test_reduce_emits_left_fold_once_on_completion() {
    // Arrange
    let source = Stream::<i32>::new();
    let folded = source.reduce(|acc: Vec<i32>, v, _| [acc, vec![*v]].concat(), Vec::new());
    let recorder = Recorder::attach(&folded);

    // Act
    source.next(1);
    source.next(2);
    assert!(recorder.is_empty());
    source.next(3);
    source.complete();

    // Assert
    assert_eq!(recorder.values(), vec![vec![1, 2, 3]]);
    assert!(recorder.is_completed());
}

#[test]
fn test_reduce_receives_emission_indices() {
    let source: Stream<&str> = ["a", "b", "c"].into_iter().collect();

    let indices = source.reduce(|acc: usize, _, index| acc + index, 0);

    assert_eq!(indices.run(), Some(3));
}

#[test]
fn test_reduce_on_empty_source_emits_seed() {
    let source = Stream::generate(0, |i| i);

    assert_eq!(source.reduce(|acc, v, _| acc + v, 42).run(), Some(42));
}

#[test]
fn test_reduce_finds_warmest_reading() {
    let source: Stream<Reading> = [reading_cellar(), reading_attic(), reading_garage()]
        .into_iter()
        .collect();

    let warmest = source.reduce(
        |best: Option<Reading>, reading, _| match best {
            Some(best) if best.celsius >= reading.celsius => Some(best),
            _ => Some(reading.clone()),
        },
        None,
    );

    assert_eq!(warmest.run(), Some(Some(reading_attic())));
}

#[test]
fn test_count_emits_running_count() {
    // Arrange
    let source = Stream::<char>::new();
    let counted = source.count();
    let recorder = Recorder::attach(&counted);

    // Act
    source.next('x');
    source.next('y');
    source.next('z');
    source.complete();

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert!(recorder.is_completed());
}

#[test]
fn test_count_starts_from_activation() {
    let source = Stream::<i32>::new();
    source.next(1);
    let counted = source.count();

    let recorder = Recorder::attach(&counted);
    source.next(2);

    assert_eq!(recorder.values(), vec![1]);
}

#[test]
fn test_to_array_preserves_order() {
    let source: Stream<i32> = [3, 1, 2].into_iter().collect();

    assert_eq!(source.to_array().run(), Some(vec![3, 1, 2]));
}

#[test]
fn test_to_array_contains_only_values_before_completion() {
    // Arrange
    let source = Stream::<i32>::new();
    let collected = source.to_array();
    let recorder = Recorder::attach(&collected);

    // Act
    source.next(1);
    source.next(2);
    source.complete();
    source.next(3);

    // Assert
    assert_eq!(recorder.values(), vec![vec![1, 2]]);
}

#[test]
fn test_generate_identity_to_array() {
    let source = Stream::generate(3, |i| i);

    assert_eq!(source.to_array().run(), Some(vec![0, 1, 2]));
}
