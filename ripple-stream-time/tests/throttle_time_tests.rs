// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::Stream;
use ripple_runtime::VirtualScheduler;
use ripple_stream_time::ThrottleTimeExt;
use ripple_test_utils::Recorder;
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_throttle_time_drops_values_inside_gap() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let source = Stream::<i32>::new();
    let throttled = source.throttle_time(ms(100), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act
    source.next(1);
    scheduler.advance(ms(50));
    source.next(2);
    scheduler.advance(ms(49));
    source.next(3);
    scheduler.advance(ms(30));
    source.next(4);

    // Assert
    assert_eq!(recorder.values(), vec![1, 3]);
}

#[test]
fn test_throttle_time_reopens_one_granularity_early() {
    let scheduler = VirtualScheduler::new();
    let source = Stream::<i32>::new();
    let recorder = Recorder::attach(&source.throttle_time(ms(10), &scheduler));

    source.next(1);
    scheduler.advance(ms(8));
    source.next(2);
    scheduler.advance(ms(1));
    source.next(3);

    assert_eq!(recorder.values(), vec![1, 3]);
}

#[test]
fn test_throttle_time_tiny_gap_is_identity() {
    let scheduler = VirtualScheduler::new();
    let source = Stream::<i32>::new();

    let throttled = source.throttle_time(ms(1), &scheduler);
    let zero = source.throttle_time(Duration::ZERO, &scheduler);

    assert_eq!(throttled.id(), source.id());
    assert_eq!(zero.id(), source.id());
}

#[test]
fn test_throttle_time_cancels_reopen_timer_on_completion() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let source = Stream::<i32>::new();
    let throttled = source.throttle_time(ms(100), &scheduler);
    let recorder = Recorder::attach(&throttled);
    source.next(1);
    assert_eq!(scheduler.pending(), 1);

    // Act
    source.complete();

    // Assert
    assert!(recorder.is_completed());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_throttle_time_is_inert_until_subscribed() {
    let scheduler = VirtualScheduler::new();
    let source = Stream::<i32>::new();
    let _throttled = source.throttle_time(ms(100), &scheduler);

    source.next(1);

    assert_eq!(source.subscriber_count(), 0);
    assert_eq!(scheduler.pending(), 0);
}
