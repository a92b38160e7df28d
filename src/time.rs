// ============================================================================
// TIME SOURCES
// ============================================================================

// The face never reads the system clock itself; it asks a `TimeSource`, so
// tests can pin the time with `FixedClock`.

use std::str::FromStr;

use chrono::Timelike;

use crate::error::{ClockError, Result};

/// Time of day shown by the hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// Hours are 0-23; minutes and seconds 0-59.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Parses `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self> {
        let fields = s
            .trim()
            .split(':')
            .map(|field| field.parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| ClockError::TimeFormat(s.to_string()))?;
        match fields.as_slice() {
            [h, m] => ClockTime::new(*h, *m, 0),
            [h, m, sec] => ClockTime::new(*h, *m, *sec),
            _ => Err(ClockError::TimeFormat(s.to_string())),
        }
    }
}

pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockTime {
        let now = chrono::Local::now();
        // chrono reports a leap second as second 60
        ClockTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second().min(59),
        }
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(ClockTime::new(24, 0, 0).is_err());
        assert!(ClockTime::new(0, 60, 0).is_err());
        assert!(ClockTime::new(0, 0, 60).is_err());
        assert!(ClockTime::new(23, 59, 59).is_ok());
    }

    #[test]
    fn parses_short_and_long_forms() {
        let t: ClockTime = "03:15".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (3, 15, 0));
        let t: ClockTime = "23:05:42".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 5, 42));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "noon".parse::<ClockTime>(),
            Err(ClockError::TimeFormat(_))
        ));
        assert!(matches!(
            "1:2:3:4".parse::<ClockTime>(),
            Err(ClockError::TimeFormat(_))
        ));
        assert!(matches!(
            "25:00".parse::<ClockTime>(),
            Err(ClockError::InvalidTime { .. })
        ));
    }

    #[test]
    fn fixed_clock_is_constant() {
        let time = ClockTime::new(9, 41, 0).unwrap();
        let clock = FixedClock(time);
        assert_eq!(clock.now(), time);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_in_range() {
        let now = SystemClock.now();
        assert!(ClockTime::new(now.hour(), now.minute(), now.second()).is_ok());
    }
}
