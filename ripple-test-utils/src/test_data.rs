// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A sensor reading, used where tests want a non-trivial payload.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reading {
    pub sensor: String,
    pub celsius: i32,
}

impl Reading {
    #[must_use]
    pub fn new(sensor: impl Into<String>, celsius: i32) -> Self {
        Self {
            sensor: sensor.into(),
            celsius,
        }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reading[sensor={}, celsius={}]", self.sensor, self.celsius)
    }
}

pub fn reading_kitchen() -> Reading {
    Reading::new("kitchen", 21)
}

pub fn reading_cellar() -> Reading {
    Reading::new("cellar", 12)
}

pub fn reading_attic() -> Reading {
    Reading::new("attic", 31)
}

pub fn reading_garage() -> Reading {
    Reading::new("garage", 17)
}
