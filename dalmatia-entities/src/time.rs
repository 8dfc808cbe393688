use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date,
    OffsetDateTime, PrimitiveDateTime, Time,
};

pub use time::Duration;

/// A point in time (UTC).
///
/// Event dates are stored with second precision, creation
/// times of reviews with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn try_from_secs(secs: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(secs).ok().map(Self)
    }

    pub fn try_from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub const fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// Like parsing with [`FromStr`], but a plain calendar date
    /// denotes the last second of that day instead of midnight.
    pub fn parse_as_end(s: &str) -> Result<Self, TimestampParseError> {
        let s = s.trim();
        match Date::parse(s, format_description!("[year]-[month]-[day]")) {
            Ok(date) => {
                let last_second = Time::from_hms(23, 59, 59)
                    .map_err(|_| TimestampParseError(s.to_owned()))?;
                Ok(Self(PrimitiveDateTime::new(date, last_second).assume_utc()))
            }
            Err(_) => s.parse(),
        }
    }

    /// Drop everything below whole seconds.
    pub fn truncate_to_secs(self) -> Self {
        Self(self.0.replace_nanosecond(0).unwrap_or(self.0))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid timestamp: {0}")]
pub struct TimestampParseError(String);

/// Accepts unix seconds, RFC 3339 date-times, and plain
/// calendar dates or date-times without an offset (interpreted as UTC).
impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(secs) = s.parse::<i64>() {
            return Self::try_from_secs(secs).ok_or_else(|| TimestampParseError(s.to_owned()));
        }
        if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self(dt));
        }
        if let Ok(dt) = PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        ) {
            return Ok(Self(dt.assume_utc()));
        }
        if let Ok(dt) =
            PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        {
            return Ok(Self(dt.assume_utc()));
        }
        if let Ok(date) = Date::parse(s, format_description!("[year]-[month]-[day]")) {
            return Ok(Self(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc()));
        }
        Err(TimestampParseError(s.to_owned()))
    }
}
