// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{Stream, StreamValue, Subscription};
use std::sync::Arc;

#[derive(Debug)]
struct Recorded<T> {
    emissions: Vec<(T, usize)>,
    completed: bool,
}

/// Subscriber that remembers everything a stream delivered.
///
/// Cheap to clone; clones share the same log.
#[derive(Debug)]
pub struct Recorder<T> {
    log: Arc<Mutex<Recorded<T>>>,
}

impl<T: StreamValue> Recorder<T> {
    /// Subscribes to `stream` (activating it) and starts recording.
    #[must_use]
    pub fn attach(stream: &Stream<T>) -> Self {
        Self::attach_with_subscription(stream).0
    }

    /// Like [`attach`](Self::attach), also returning the subscription so the
    /// test can unsubscribe the recorder.
    #[must_use]
    pub fn attach_with_subscription(stream: &Stream<T>) -> (Self, Subscription) {
        let log = Arc::new(Mutex::new(Recorded {
            emissions: Vec::new(),
            completed: false,
        }));

        let on_complete = Arc::clone(&log);
        stream.on_completed(move || on_complete.lock().completed = true);

        let sink = Arc::clone(&log);
        let subscription = stream.subscribe(move |value, index| {
            sink.lock().emissions.push((value.clone(), index));
        });

        (Self { log }, subscription)
    }

    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.log
            .lock()
            .emissions
            .iter()
            .map(|(value, _)| value.clone())
            .collect()
    }

    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.log.lock().emissions.iter().map(|(_, index)| *index).collect()
    }

    #[must_use]
    pub fn emissions(&self) -> Vec<(T, usize)> {
        self.log.lock().emissions.clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.log.lock().emissions.last().map(|(value, _)| value.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().emissions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.lock().emissions.is_empty()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.log.lock().completed
    }

    /// Forgets the emissions recorded so far.
    pub fn clear(&self) {
        self.log.lock().emissions.clear();
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}
