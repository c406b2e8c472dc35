//! Injectable wall-clock source.
//!
//! Time resolution needs "today" and the local timezone offset when the
//! caller does not supply them. Both come from a [`Clock`] so that tests can
//! pin them with [`FixedClock`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

/// A source of the current instant and local timezone offset.
pub trait Clock: Send + Sync {
    /// The current instant, expressed in the local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Hours to add to local time to reach UTC (positive west of Greenwich,
    /// e.g. `5` for UTC-05:00). Fractional offsets truncate toward zero, so
    /// half-hour zones lose their minutes: UTC+05:30 reads as `-5`.
    fn timezone_offset_hours(&self) -> i32 {
        -self.now().offset().local_minus_utc() / 3600
    }

    /// The local calendar date of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// Reads the operating system clock and local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Pin the clock to an RFC 3339 instant, keeping its offset as the local one.
    pub fn parse(rfc3339: &str) -> crate::error::Result<Self> {
        DateTime::parse_from_rfc3339(rfc3339)
            .map(Self::new)
            .map_err(|e| crate::error::RecognizerError::InvalidDatetime(format!("'{rfc3339}': {e}")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
