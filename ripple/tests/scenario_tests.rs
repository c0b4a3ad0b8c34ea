// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple::prelude::*;
use ripple_test_utils::test_data::{reading_attic, reading_cellar, reading_garage, reading_kitchen, Reading};
use ripple_test_utils::{assert_completed, assert_not_completed, collect_sync, Recorder};
use std::time::Duration;

#[test]
fn test_generate_to_array() {
    assert_eq!(Stream::generate(3, |i| i).to_array().run(), Some(vec![0, 1, 2]));
}

#[test]
fn test_from_iter_map_to_array() {
    let doubled = Stream::from_iter([10, 20, 30]).map(|v| v * 2).to_array();
    assert_eq!(doubled.run(), Some(vec![20, 40, 60]));
}

#[test]
fn test_take_two_of_sync_source() {
    let source: Stream<i32> = [1, 2, 3, 4].into_iter().collect();
    assert_eq!(collect_sync(&source.take(2)), vec![1, 2]);
}

#[test]
fn test_reduce_is_left_fold() {
    let readings: Stream<Reading> =
        [reading_kitchen(), reading_cellar(), reading_attic()].into_iter().collect();

    let warmest = readings
        .reduce(|best: Option<Reading>, r, _| match best {
            Some(b) if b.celsius >= r.celsius => Some(b),
            _ => Some(r.clone()),
        }, None)
        .run();

    assert_eq!(warmest, Some(Some(reading_attic())));
}

#[test]
fn test_sensor_pipeline_filters_and_counts() {
    // Arrange
    let source = Stream::<Reading>::new();
    let warm = source.filter(|r| r.celsius > 15).map(|r| r.sensor.clone());
    let names = Recorder::attach(&warm);
    let total = Recorder::attach(&warm.count());

    // Act
    source.next(reading_kitchen());
    source.next(reading_cellar());
    source.next(reading_garage());
    source.complete();

    // Assert
    assert_eq!(names.values(), vec!["kitchen".to_string(), "garage".to_string()]);
    assert_eq!(total.values(), vec![1, 2]);
    assert_completed(&warm);
}

#[test]
fn test_merge_waits_for_both_sources() {
    // Arrange
    let temperatures = Stream::<i32>::new();
    let alarms = Stream::<&'static str>::new();
    let merged = temperatures.merge(&alarms);
    let recorder = Recorder::attach(&merged);

    // Act
    temperatures.next(21);
    alarms.next("smoke");
    temperatures.complete();

    // Assert
    assert_not_completed(&merged);
    alarms.complete();
    assert_completed(&merged);
    let sides: Vec<bool> = recorder.values().iter().map(|r| r.value.is_left()).collect();
    assert_eq!(sides, vec![true, false]);
}

#[test]
fn test_concat_orders_sources() {
    let first: Stream<i32> = [1, 2].into_iter().collect();
    let second: Stream<i32> = [3, 4].into_iter().collect();

    let values: Vec<i32> = first
        .concat(&second)
        .map(|r| r.value.clone().into_inner())
        .to_array()
        .run()
        .unwrap_or_default();

    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn test_zip_pairs_fresh_values() {
    // Arrange
    let left = Stream::<i32>::new();
    let right = Stream::<i32>::new();
    let zipped = left.zip(&[right.clone()]);
    let recorder = Recorder::attach(&zipped);

    // Act
    left.next(1);
    left.next(2);
    right.next(10);
    right.next(20);
    left.next(3);

    // Assert
    assert_eq!(recorder.values(), vec![vec![2, 10], vec![3, 20]]);
}

#[test]
fn test_until_then_take_and_complete() {
    // Arrange
    let source = Stream::<i32>::new();
    let armed = source.until(|v| *v == 0).take_and_complete(2);
    let recorder = Recorder::attach(&armed);

    // Act
    source.next(5);
    source.next(0);
    source.next(7);
    source.next(8);

    // Assert
    assert_eq!(recorder.values(), vec![7, 8]);
    assert!(recorder.is_completed());
    assert_eq!(source.subscriber_count(), 0);
}

#[test]
fn test_switch_map_forwards_inner_values() {
    let source = Stream::<usize>::new();
    let expanded = source.switch_map(|n| Stream::generate(*n, |i| i * 10));
    let recorder = Recorder::attach(&expanded);

    source.next(2);
    source.next(3);

    assert_eq!(recorder.values(), vec![0, 10, 0, 10, 20]);
}

#[test]
fn test_gate_throttle_with_manual_gate() {
    let source = Stream::<i32>::new();
    let gate = Stream::<()>::new();
    let recorder = Recorder::attach(&source.throttle(&gate));

    source.next(1);
    source.next(2);
    gate.next(());
    source.next(3);

    assert_eq!(recorder.values(), vec![1, 3]);
}

#[test]
fn test_interval_debounce_on_virtual_time() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let ticks = interval(Duration::from_millis(10), &scheduler, |n| n);
    let bounded = ticks.take_and_complete(5);
    let settled = bounded.debounce_time(Duration::from_millis(50), &scheduler);
    let recorder = Recorder::attach(&settled);

    // Act
    scheduler.advance(Duration::from_millis(200));

    // Assert
    assert!(recorder.is_empty());
    assert!(recorder.is_completed());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_throttle_time_samples_interval() {
    let scheduler = VirtualScheduler::new();
    let ticks = interval(Duration::from_millis(10), &scheduler, |n| n);
    let sampled = ticks.throttle_time(Duration::from_millis(30), &scheduler);
    let recorder = Recorder::attach(&sampled);

    scheduler.advance(Duration::from_millis(100));

    assert_eq!(recorder.values(), vec![0, 3, 6, 9]);
}

#[test]
fn test_from_deferred_with_promise() {
    // Arrange
    let (resolver, deferred) = promise::<Reading>();
    let reading = Stream::from_deferred(deferred);
    let recorder = Recorder::attach(&reading);

    // Act
    resolver.resolve(reading_cellar());

    // Assert
    assert_eq!(recorder.values(), vec![reading_cellar()]);
    assert!(recorder.is_completed());
}
