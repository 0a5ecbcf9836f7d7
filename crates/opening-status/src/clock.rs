//! Weekdays, minute-of-day clock times, and the explicit "now" of a resolution.
//!
//! Nothing in this module reads the system clock. Callers build a
//! [`WeekMoment`] from whatever instant they consider "now" (typically a
//! `chrono::DateTime` already converted to the directory's local timezone)
//! and pass it to [`resolve`](crate::status::resolve).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ScheduleError;

/// Minutes in one day. Clock times live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ── DayKey ──────────────────────────────────────────────────────────────────

/// One of the seven weekdays, ordered Sunday first.
///
/// Serialized as the lowercase three-letter abbreviation used as the key of
/// structured opening hours (`"sun"`, `"mon"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayKey {
    /// All days in week order, Sunday first.
    pub const ALL: [DayKey; 7] = [
        DayKey::Sun,
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
    ];

    /// Position in the week, 0 (Sunday) to 6 (Saturday).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<DayKey> {
        Self::ALL.get(index).copied()
    }

    /// The structured-hours key for this day.
    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Sun => "sun",
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKey {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(DayKey::Sun),
            "mon" => Ok(DayKey::Mon),
            "tue" => Ok(DayKey::Tue),
            "wed" => Ok(DayKey::Wed),
            "thu" => Ok(DayKey::Thu),
            "fri" => Ok(DayKey::Fri),
            "sat" => Ok(DayKey::Sat),
            _ => Err(ScheduleError::UnknownDay(format!("'{}'", s))),
        }
    }
}

impl From<Weekday> for DayKey {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<DayKey> for Weekday {
    fn from(day: DayKey) -> Self {
        match day {
            DayKey::Sun => Weekday::Sun,
            DayKey::Mon => Weekday::Mon,
            DayKey::Tue => Weekday::Tue,
            DayKey::Wed => Weekday::Wed,
            DayKey::Thu => Weekday::Thu,
            DayKey::Fri => Weekday::Fri,
            DayKey::Sat => Weekday::Sat,
        }
    }
}

// ── ClockTime ───────────────────────────────────────────────────────────────

/// A time of day as minutes since local midnight, always below
/// [`MINUTES_PER_DAY`].
///
/// Displays and serializes as a zero-padded 24-hour `HH:MM` string.
///
/// # Examples
///
/// ```
/// use opening_status::ClockTime;
///
/// let t: ClockTime = "09:05".parse().unwrap();
/// assert_eq!(t.minutes(), 545);
/// assert_eq!(t.to_string(), "09:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build a clock time from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] if `minutes >= 1440`.
    pub fn from_minutes(minutes: u16) -> Result<Self, ScheduleError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTime(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(ClockTime(minutes))
    }

    /// Build a clock time from an hour (0-23) and a minute (0-59).
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "{hour:02}:{minute:02} is not a 24-hour clock time"
            )));
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    /// Parse a strict `HH:MM` string (two digits each side of the colon).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(format!("'{}'", s));

        let (hh, mm) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !is_two_digits(hh) || !is_two_digits(mm) {
            return Err(invalid());
        }

        let hour: u16 = hh.parse().map_err(|_| invalid())?;
        let minute: u16 = mm.parse().map_err(|_| invalid())?;
        ClockTime::from_hm(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── WeekMoment ──────────────────────────────────────────────────────────────

/// The reference instant of a resolution: a weekday and a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMoment {
    pub weekday: DayKey,
    pub time: ClockTime,
}

impl WeekMoment {
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidMoment`] if `minutes >= 1440`.
    pub fn new(weekday: DayKey, minutes: u16) -> Result<Self, ScheduleError> {
        let time = ClockTime::from_minutes(minutes)
            .map_err(|e| ScheduleError::InvalidMoment(e.to_string()))?;
        Ok(WeekMoment { weekday, time })
    }

    /// Take the weekday and wall-clock time of `dt` in its own timezone.
    /// Seconds are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use opening_status::{DayKey, WeekMoment};
    ///
    /// // 2026-03-16 is a Monday
    /// let dt = Utc.with_ymd_and_hms(2026, 3, 16, 10, 30, 59).unwrap();
    /// let now = WeekMoment::from_datetime(&dt);
    /// assert_eq!(now.weekday, DayKey::Mon);
    /// assert_eq!(now.minutes(), 630);
    /// ```
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        // hour() <= 23 and minute() <= 59, so this is always below MINUTES_PER_DAY
        let minutes = (dt.hour() * 60 + dt.minute()) as u16;
        WeekMoment {
            weekday: DayKey::from(dt.weekday()),
            time: ClockTime(minutes),
        }
    }

    pub fn minutes(self) -> u16 {
        self.time.minutes()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    // ── DayKey tests ────────────────────────────────────────────────────

    #[test]
    fn test_day_key_index_sunday_first() {
        assert_eq!(DayKey::Sun.index(), 0);
        assert_eq!(DayKey::Sat.index(), 6);
        assert_eq!(DayKey::from_index(1), Some(DayKey::Mon));
        assert_eq!(DayKey::from_index(7), None);
    }

    #[test]
    fn test_day_key_parse_accepts_structured_keys() {
        for day in DayKey::ALL {
            assert_eq!(day.as_str().parse::<DayKey>().unwrap(), day);
        }
        assert_eq!(" Wed ".parse::<DayKey>().unwrap(), DayKey::Wed);
    }

    #[test]
    fn test_day_key_parse_rejects_full_names() {
        let err = "monday".parse::<DayKey>().unwrap_err().to_string();
        assert!(err.contains("Unknown day"), "got: {err}");
    }

    #[test]
    fn test_day_key_from_chrono_weekday() {
        assert_eq!(DayKey::from(Weekday::Sun), DayKey::Sun);
        assert_eq!(DayKey::from(Weekday::Thu), DayKey::Thu);
        assert_eq!(Weekday::from(DayKey::Sat), Weekday::Sat);
    }

    #[test]
    fn test_day_key_serde_lowercase() {
        assert_eq!(serde_json::to_string(&DayKey::Fri).unwrap(), "\"fri\"");
        let day: DayKey = serde_json::from_str("\"tue\"").unwrap();
        assert_eq!(day, DayKey::Tue);
    }

    // ── ClockTime tests ─────────────────────────────────────────────────

    #[test]
    fn test_clock_time_zero_padded() {
        assert_eq!(ClockTime::from_minutes(0).unwrap().to_string(), "00:00");
        assert_eq!(ClockTime::from_minutes(65).unwrap().to_string(), "01:05");
        assert_eq!(ClockTime::from_minutes(1439).unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_clock_time_rejects_end_of_day() {
        assert!(ClockTime::from_minutes(1440).is_err());
        assert!(ClockTime::from_hm(24, 0).is_err());
        assert!(ClockTime::from_hm(12, 60).is_err());
    }

    #[test]
    fn test_clock_time_parse_strict() {
        assert_eq!("17:00".parse::<ClockTime>().unwrap().minutes(), 1020);
        assert!("9:00".parse::<ClockTime>().is_err());
        assert!("09-00".parse::<ClockTime>().is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("+1:00".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_serializes_as_string() {
        let t = ClockTime::from_hm(8, 30).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"08:30\"");
    }

    // ── WeekMoment tests ────────────────────────────────────────────────

    #[test]
    fn test_moment_rejects_out_of_range_minutes() {
        let err = WeekMoment::new(DayKey::Mon, 1440).unwrap_err().to_string();
        assert!(err.contains("Invalid moment"), "got: {err}");
    }

    #[test]
    fn test_moment_from_datetime_uses_local_wall_clock() {
        // 2026-03-15T23:30Z is Monday 00:30 in Berlin (CET, UTC+1)
        let utc = chrono::Utc.with_ymd_and_hms(2026, 3, 15, 23, 30, 0).unwrap();
        let berlin = utc.with_timezone(&chrono_tz::Europe::Berlin);
        let now = WeekMoment::from_datetime(&berlin);
        assert_eq!(now.weekday, DayKey::Mon);
        assert_eq!(now.minutes(), 30);

        let as_utc = WeekMoment::from_datetime(&utc);
        assert_eq!(as_utc.weekday, DayKey::Sun);
        assert_eq!(as_utc.minutes(), 23 * 60 + 30);
    }

    proptest! {
        #[test]
        fn prop_clock_time_format_parse_round_trip(m in 0u16..MINUTES_PER_DAY) {
            let formatted = ClockTime::from_minutes(m).unwrap().to_string();
            let parsed: ClockTime = formatted.parse().unwrap();
            prop_assert_eq!(parsed.minutes(), m);
            prop_assert_eq!(parsed.hour(), m / 60);
            prop_assert_eq!(parsed.minute(), m % 60);
        }
    }
}
