//! Wall-clock snapshots for the time display.

use std::fmt;

use chrono::{Local, Timelike};

/// An immutable hours/minutes/seconds snapshot, replaced wholesale on every
/// sample. Displays as zero-padded 24-hour `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// Samples the current local time. Cannot fail.
    pub fn now() -> Self {
        let time = Local::now().time();
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    /// Builds a snapshot from explicit fields, rejecting out-of-range values.
    pub fn from_hms(hours: u8, minutes: u8, seconds: u8) -> Result<Self, Error> {
        for (field, value, max) in [
            ("hours", hours, 23),
            ("minutes", minutes, 59),
            ("seconds", seconds, 59),
        ] {
            if value > max {
                return Err(Error::OutOfRange { field, value, max });
            }
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug)]
pub enum Error {
    /// A field of an explicit snapshot exceeds its range.
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, value, max } => {
                write!(f, "{field} must be at most {max}, got {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
