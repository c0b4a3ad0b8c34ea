// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_runtime::{Scheduler, TimerHandle, VirtualScheduler};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn log_task(log: &Arc<Mutex<Vec<&'static str>>>, label: &'static str) -> Box<dyn FnOnce() + Send> {
    let log = Arc::clone(log);
    Box::new(move || log.lock().push(label))
}

#[test]
fn test_timer_fires_only_once_deadline_reached() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    scheduler.schedule(ms(30), log_task(&log, "a"));

    // Act & Assert
    scheduler.advance(ms(29));
    assert!(log.lock().is_empty());
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(ms(1));
    assert_eq!(*log.lock(), vec!["a"]);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.now(), ms(30));
}

#[test]
fn test_timers_fire_in_deadline_then_scheduling_order() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    scheduler.schedule(ms(20), log_task(&log, "late"));
    scheduler.schedule(ms(10), log_task(&log, "first-at-10"));
    scheduler.schedule(ms(10), log_task(&log, "second-at-10"));

    // Act
    scheduler.advance(ms(100));

    // Assert
    assert_eq!(*log.lock(), vec!["first-at-10", "second-at-10", "late"]);
}

#[test]
fn test_cancel_prevents_firing_and_ignores_unknown_handles() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let handle = scheduler.schedule(ms(10), log_task(&log, "canceled"));
    scheduler.schedule(ms(10), log_task(&log, "kept"));

    // Act
    scheduler.cancel(handle);
    scheduler.cancel(handle);
    scheduler.cancel(TimerHandle::new(999));
    scheduler.advance(ms(10));

    // Assert
    assert_eq!(*log.lock(), vec!["kept"]);
}

#[test]
fn test_repeating_timer_ticks_every_period_until_canceled() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let ticks = Arc::new(Mutex::new(Vec::new()));
    let clock = scheduler.clone();
    let seen = Arc::clone(&ticks);
    let handle = scheduler.schedule_repeating(
        ms(25),
        Arc::new(move || seen.lock().push(clock.now())),
    );

    // Act
    scheduler.advance(ms(80));
    scheduler.cancel(handle);
    scheduler.advance(ms(100));

    // Assert
    assert_eq!(*ticks.lock(), vec![ms(25), ms(50), ms(75)]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_repeating_timer_can_cancel_itself_from_its_tick() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let count = Arc::new(Mutex::new(0_usize));
    let own_handle: Arc<Mutex<Option<TimerHandle>>> = Arc::new(Mutex::new(None));

    let inner = scheduler.clone();
    let counter = Arc::clone(&count);
    let slot = Arc::clone(&own_handle);
    let handle = scheduler.schedule_repeating(
        ms(10),
        Arc::new(move || {
            let mut count = counter.lock();
            *count += 1;
            if *count == 2 {
                if let Some(handle) = *slot.lock() {
                    inner.cancel(handle);
                }
            }
        }),
    );
    *own_handle.lock() = Some(handle);

    // Act
    scheduler.advance(ms(100));

    // Assert
    assert_eq!(*count.lock(), 2);
}

#[test]
fn test_zero_period_repeating_timer_is_clamped() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let count = Arc::new(Mutex::new(0_usize));
    let counter = Arc::clone(&count);
    scheduler.schedule_repeating(Duration::ZERO, Arc::new(move || *counter.lock() += 1));

    // Act
    scheduler.advance(ms(5));

    // Assert
    assert_eq!(*count.lock(), 5);
}

#[test]
fn test_task_scheduled_from_callback_fires_within_same_advance() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let inner = scheduler.clone();
    let nested_log = Arc::clone(&log);
    scheduler.schedule(
        ms(10),
        Box::new(move || {
            nested_log.lock().push("outer");
            inner.schedule(ms(5), log_task(&nested_log, "nested"));
        }),
    );

    // Act
    scheduler.advance(ms(15));

    // Assert
    assert_eq!(*log.lock(), vec!["outer", "nested"]);
    assert_eq!(scheduler.now(), ms(15));
}

#[test]
fn test_huge_delays_saturate_instead_of_overflowing() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let once = Arc::clone(&fired);
    scheduler.advance(ms(10));
    scheduler.schedule(Duration::MAX, Box::new(move || {
        once.fetch_add(1, Ordering::SeqCst);
    }));

    // Act
    scheduler.advance(Duration::MAX);

    // Assert
    assert_eq!(scheduler.now(), Duration::MAX);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_repeating_timer_retired_when_clock_saturates() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);
    scheduler.schedule_repeating(
        Duration::MAX - ms(5),
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    // Act
    scheduler.advance(Duration::MAX);
    scheduler.advance(Duration::MAX);

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
    assert_eq!(scheduler.pending(), 0);
}
