//! Civil time derived from epoch seconds
//!
//! The clock source hands us raw UTC epoch seconds; everything the
//! renderers need (hour, minute, calendar date, weekday) is derived here
//! so no renderer has to carry its own calendar math.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds per day
const SECS_PER_DAY: u64 = 86_400;

/// A point-in-time snapshot taken from a clock source
///
/// Immutable once sampled; renderers take these by reference and never
/// hold onto them across render passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSample {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week (0 = Sunday)
    pub weekday: u8,
}

impl TimeSample {
    /// Break epoch seconds (UTC) down into civil fields.
    pub fn from_epoch(secs: u64) -> Self {
        let days = (secs / SECS_PER_DAY) as i64;
        let secs_of_day = secs % SECS_PER_DAY;
        let (_, month, day) = civil_from_days(days);

        Self {
            hour: (secs_of_day / 3600) as u8,
            minute: (secs_of_day % 3600 / 60) as u8,
            month,
            day,
            // 1970-01-01 was a Thursday
            weekday: ((days + 4) % 7) as u8,
        }
    }

    /// Minutes elapsed since midnight (0-1439)
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Abbreviated weekday name ("Sun".."Sat")
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.weekday) % 7]
    }

    /// Abbreviated month name ("Jan".."Dec")
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month.clamp(1, 12)) - 1]
    }

    /// Day of month with its ordinal suffix ("1st", "22nd", "13th")
    pub fn pretty_day(&self) -> String<4> {
        let mut s = String::new();
        let _ = write!(s, "{}{}", self.day, ordinal_suffix(self.day));
        s
    }
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Ordinal suffix for a day of month
fn ordinal_suffix(day: u8) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Days since 1970-01-01 to (year, month, day)
///
/// Standard proleptic-Gregorian conversion working in 400-year eras.
fn civil_from_days(z: i64) -> (i64, u8, u8) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_zero() {
        let t = TimeSample::from_epoch(0);
        assert_eq!(t.hour, 0);
        assert_eq!(t.minute, 0);
        assert_eq!(t.month, 1);
        assert_eq!(t.day, 1);
        assert_eq!(t.weekday_name(), "Thu");
    }

    #[test]
    fn test_last_minute_of_day() {
        let t = TimeSample::from_epoch(86_399);
        assert_eq!(t.hour, 23);
        assert_eq!(t.minute, 59);
        assert_eq!(t.minutes_since_midnight(), 1439);
    }

    #[test]
    fn test_known_timestamp() {
        // 2001-09-09 01:46:40 UTC, a Sunday
        let t = TimeSample::from_epoch(1_000_000_000);
        assert_eq!(t.month, 9);
        assert_eq!(t.day, 9);
        assert_eq!(t.hour, 1);
        assert_eq!(t.minute, 46);
        assert_eq!(t.weekday_name(), "Sun");
        assert_eq!(t.month_name(), "Sep");
    }

    #[test]
    fn test_leap_day() {
        // 2000-02-29 00:00 UTC, a Tuesday
        let t = TimeSample::from_epoch(951_782_400);
        assert_eq!(t.month, 2);
        assert_eq!(t.day, 29);
        assert_eq!(t.weekday_name(), "Tue");
    }

    #[test]
    fn test_pretty_day() {
        let mut t = TimeSample::from_epoch(0);
        assert_eq!(t.pretty_day().as_str(), "1st");
        t.day = 2;
        assert_eq!(t.pretty_day().as_str(), "2nd");
        t.day = 3;
        assert_eq!(t.pretty_day().as_str(), "3rd");
        t.day = 11;
        assert_eq!(t.pretty_day().as_str(), "11th");
        t.day = 12;
        assert_eq!(t.pretty_day().as_str(), "12th");
        t.day = 21;
        assert_eq!(t.pretty_day().as_str(), "21st");
        t.day = 30;
        assert_eq!(t.pretty_day().as_str(), "30th");
    }
}
