//! Date and time helpers for picker elements.
//!
//! - strict `YYYY-MM-DD` calendar dates (date pickers)
//! - `hh:mm a` clock times, rendered as 24-hour `HH:mm` (time pickers)
//! - the [`Clock`] capability that supplies "now" in a given zone, and the
//!   5-minute round-up used for a time picker's default value

use chrono::{Duration, FixedOffset, Local, NaiveDate, NaiveTime, Timelike, Utc};
use thiserror::Error;

use crate::error::BlockError;

/// Error raised while parsing a date, time or offset string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeParseError {
    #[error("Expected YYYY-MM-DD, got: {0}")]
    DateFormat(String),

    #[error("No such calendar day: {0}")]
    NoSuchDay(String),

    #[error("Invalid time {value}: {reason}")]
    Time { value: String, reason: String },

    #[error("Invalid timezone offset: {0}")]
    Offset(String),
}

/// Parses a run of ASCII digits. Anything else, including signs, fails.
fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// =====================
// Dates
// =====================

/// Parses a strict `YYYY-MM-DD` date.
///
/// Exactly ten ASCII characters, zero-padded, and a day that exists in its
/// month. No time or offset suffix is accepted.
pub fn parse_calendar_date(date_str: &str) -> Result<NaiveDate, DateTimeParseError> {
    let format_err = || DateTimeParseError::DateFormat(date_str.to_string());

    if date_str.len() != 10 || !date_str.is_ascii() {
        return Err(format_err());
    }
    let mut parts = date_str.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(format_err());
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return Err(format_err());
    }
    let (Some(year), Some(month), Some(day)) = (digits(y), digits(m), digits(d)) else {
        return Err(format_err());
    };

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| DateTimeParseError::NoSuchDay(date_str.to_string()))
}

// =====================
// Times
// =====================

/// Parses a 12-hour `hh:mm a` time such as `"02:30 pm"`.
pub fn parse_clock_time(time_str: &str) -> Result<NaiveTime, DateTimeParseError> {
    NaiveTime::parse_from_str(time_str.trim(), "%I:%M %p").map_err(|e| DateTimeParseError::Time {
        value: time_str.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a time as 24-hour `HH:mm`.
pub fn format_hh_mm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Moves a time forward to the next 5-minute boundary, wrapping at midnight.
///
/// A time already on a boundary still moves a full 5 minutes.
pub fn round_up_to_five(time: NaiveTime) -> NaiveTime {
    let add = 5 - i64::from(time.minute() % 5);
    let (rounded, _) = time.overflowing_add_signed(Duration::minutes(add));
    rounded
}

/// Parses `Z` or a fixed `±HH:MM` offset into minutes east of UTC.
pub fn parse_timezone_offset(offset: &str) -> Result<i16, DateTimeParseError> {
    if offset.eq_ignore_ascii_case("z") {
        return Ok(0);
    }
    let invalid = || DateTimeParseError::Offset(offset.to_string());

    let (sign, rest) = if let Some(rest) = offset.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = offset.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let (hh, mm) = rest.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    let (Some(hours), Some(minutes)) = (digits(hh), digits(mm)) else {
        return Err(invalid());
    };
    if minutes > 59 {
        return Err(invalid());
    }

    let seconds = sign * (hours as i32 * 3600 + minutes as i32 * 60);
    let offset = FixedOffset::east_opt(seconds).ok_or_else(invalid)?;
    Ok((offset.local_minus_utc() / 60) as i16)
}

/// Resolves the zones the built-in clocks understand into an offset in minutes.
///
/// Accepts `UTC`, `GMT`, `Etc/UTC`, `Etc/GMT`, `Z` and fixed `±HH:MM` offsets.
pub fn zone_offset_minutes(zone: &str) -> Result<i16, BlockError> {
    match zone {
        "UTC" | "GMT" | "Etc/UTC" | "Etc/GMT" => Ok(0),
        other => parse_timezone_offset(other).map_err(|_| BlockError::UnknownTimeZone {
            zone: other.to_string(),
        }),
    }
}

// =====================
// Clock
// =====================

/// Source of the current wall-clock time.
///
/// The time picker asks for "now" when no initial time is given. Named IANA
/// zones need a time zone database; supply a `Clock` that has one, or use
/// [`SystemClock`] for local time, UTC and fixed offsets.
pub trait Clock {
    /// Returns the current time of day in `zone`, or local time for `None`.
    fn now(&self, zone: Option<&str>) -> Result<NaiveTime, BlockError>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self, zone: Option<&str>) -> Result<NaiveTime, BlockError> {
        let Some(zone) = zone else {
            return Ok(Local::now().time());
        };
        let minutes = zone_offset_minutes(zone)?;
        let offset = FixedOffset::east_opt(i32::from(minutes) * 60).ok_or_else(|| BlockError::UnknownTimeZone {
            zone: zone.to_string(),
        })?;
        Ok(Utc::now().with_timezone(&offset).time())
    }
}

/// A clock stopped at a fixed UTC time of day.
///
/// Zones are applied as offsets from that time; `None` means UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub utc: NaiveTime,
}

impl FixedClock {
    pub fn new(utc: NaiveTime) -> Self {
        Self { utc }
    }

    /// Returns a clock at `hour:minute` UTC, or `None` for an invalid time.
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self, zone: Option<&str>) -> Result<NaiveTime, BlockError> {
        let minutes = match zone {
            Some(zone) => zone_offset_minutes(zone)?,
            None => 0,
        };
        let (time, _) = self.utc.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_calendar_date() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(parse_calendar_date("2024-03-15").unwrap(), date(2024, 3, 15));
        assert_eq!(parse_calendar_date("2000-02-29").unwrap(), date(2000, 2, 29)); // leap year
        assert!(matches!(parse_calendar_date("1900-02-29"), Err(DateTimeParseError::NoSuchDay(_))));
        assert!(parse_calendar_date("2024-13-01").is_err());
        assert!(parse_calendar_date("2024-04-31").is_err());
        assert!(matches!(parse_calendar_date("2024-0é-1"), Err(DateTimeParseError::DateFormat(_))));
        assert!(parse_calendar_date("2024-+4-01").is_err());
        assert!(parse_calendar_date("2024-4-01").is_err());
        assert!(parse_calendar_date("2024-04-01Z").is_err());
        assert!(parse_calendar_date("+024-04-01").is_err());
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("02:30 pm").unwrap(), hm(14, 30));
        assert_eq!(parse_clock_time("12:05 AM").unwrap(), hm(0, 5));
        assert_eq!(parse_clock_time("11:59 PM").unwrap(), hm(23, 59));
        assert!(parse_clock_time("14:30").is_err());
        assert!(parse_clock_time("noon").is_err());
    }

    #[test]
    fn test_format_hh_mm() {
        assert_eq!(format_hh_mm(hm(9, 5)), "09:05");
        assert_eq!(format_hh_mm(hm(23, 0)), "23:00");
    }

    #[test]
    fn test_round_up_to_five() {
        assert_eq!(round_up_to_five(hm(10, 2)), hm(10, 5));
        assert_eq!(round_up_to_five(hm(10, 5)), hm(10, 10));
        assert_eq!(round_up_to_five(hm(10, 59)), hm(11, 0));
        assert_eq!(round_up_to_five(hm(23, 57)), hm(0, 0));
    }

    #[test]
    fn test_parse_timezone_offset() {
        assert_eq!(parse_timezone_offset("Z").unwrap(), 0);
        assert_eq!(parse_timezone_offset("+05:30").unwrap(), 330);
        assert_eq!(parse_timezone_offset("-08:00").unwrap(), -480);
        assert!(parse_timezone_offset("+5:30").is_err());
        assert!(parse_timezone_offset("05:30").is_err());
        assert!(parse_timezone_offset("+25:00").is_err());
        assert!(parse_timezone_offset("+05:60").is_err());
        assert!(parse_timezone_offset("+0é:0").is_err());
        assert!(parse_timezone_offset("+é:00").is_err());
        assert!(parse_timezone_offset("+-1:00").is_err());
    }

    #[test]
    fn test_zone_offset_minutes() {
        assert_eq!(zone_offset_minutes("UTC").unwrap(), 0);
        assert_eq!(zone_offset_minutes("+01:00").unwrap(), 60);
        let err = zone_offset_minutes("Mars/Olympus").unwrap_err();
        assert_eq!(err, BlockError::UnknownTimeZone { zone: "Mars/Olympus".into() });
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at(23, 30).unwrap();
        assert_eq!(clock.now(None).unwrap(), hm(23, 30));
        assert_eq!(clock.now(Some("+01:00")).unwrap(), hm(0, 30));
        assert_eq!(clock.now(Some("-05:00")).unwrap(), hm(18, 30));
        assert!(clock.now(Some("Europe/Paris")).is_err());
    }

    #[test]
    fn test_non_ascii_zone_is_unknown() {
        let clock = FixedClock::at(12, 0).unwrap();
        let err = clock.now(Some("+0é:0")).unwrap_err();
        assert_eq!(err, BlockError::UnknownTimeZone { zone: "+0é:0".into() });
        assert!(SystemClock.now(Some("−05:00")).is_err());
    }

    #[test]
    fn test_system_clock_zones() {
        assert!(SystemClock.now(None).is_ok());
        assert!(SystemClock.now(Some("UTC")).is_ok());
        assert!(SystemClock.now(Some("Nowhere/City")).is_err());
    }
}
