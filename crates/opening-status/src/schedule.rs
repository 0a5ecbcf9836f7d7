//! Weekly schedule model: per-day interval and appointment entries.
//!
//! Structured opening hours arrive as a JSON object keyed by day
//! (`"sun"` .. `"sat"`), each value a list of entries:
//!
//! ```json
//! { "mon": ["09:00–12:00", "13:00–17:00"], "fri": ["appointment"] }
//! ```
//!
//! Interval text uses an en-dash (U+2013) between start and end. Building a
//! [`WeeklySchedule`] from JSON never fails: entries that cannot be parsed are
//! dropped and kept aside in [`WeeklySchedule::rejected`] so the caller can
//! report them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::clock::{ClockTime, DayKey};
use crate::error::ScheduleError;

/// The literal entry marking "by appointment only".
pub const APPOINTMENT_MARKER: &str = "appointment";

/// `HH:MM–HH:MM`, searched anywhere in the entry text.
static INTERVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}):([0-9]{2})\x{2013}([0-9]{2}):([0-9]{2})")
        .expect("interval pattern compiles")
});

// ── DayEntry ────────────────────────────────────────────────────────────────

/// One entry of a day's opening hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEntry {
    /// Open by arrangement only; carries no time data.
    Appointment,
    /// Open during `[start, end)` on that day.
    Interval { start: ClockTime, end: ClockTime },
}

impl DayEntry {
    /// Build an interval entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptyInterval`] if `start >= end`. Intervals
    /// never wrap past midnight.
    pub fn interval(start: ClockTime, end: ClockTime) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::EmptyInterval { start, end });
        }
        Ok(DayEntry::Interval { start, end })
    }

    pub fn is_appointment(&self) -> bool {
        matches!(self, DayEntry::Appointment)
    }
}

impl FromStr for DayEntry {
    type Err = ScheduleError;

    /// Parse `"appointment"` or the first `HH:MM–HH:MM` found in the text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == APPOINTMENT_MARKER {
            return Ok(DayEntry::Appointment);
        }

        let caps = INTERVAL_PATTERN
            .captures(s)
            .ok_or_else(|| ScheduleError::InvalidInterval(format!("'{}'", s)))?;

        let field = |i: usize| -> Result<u16, ScheduleError> {
            caps[i]
                .parse()
                .map_err(|_| ScheduleError::InvalidInterval(format!("'{}'", s)))
        };
        let start = ClockTime::from_hm(field(1)?, field(2)?)
            .map_err(|e| ScheduleError::InvalidInterval(format!("'{}': {}", s, e)))?;
        let end = ClockTime::from_hm(field(3)?, field(4)?)
            .map_err(|e| ScheduleError::InvalidInterval(format!("'{}': {}", s, e)))?;

        DayEntry::interval(start, end)
    }
}

impl fmt::Display for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayEntry::Appointment => f.write_str(APPOINTMENT_MARKER),
            DayEntry::Interval { start, end } => write!(f, "{start}\u{2013}{end}"),
        }
    }
}

// ── WeeklySchedule ──────────────────────────────────────────────────────────

/// An entry that was present in the input but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub day: DayKey,
    pub text: String,
    pub reason: ScheduleError,
}

/// Opening entries per weekday. Days without entries are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: BTreeMap<DayKey, Vec<DayEntry>>,
    rejected: Vec<RejectedEntry>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Self::push).
    ///
    /// # Examples
    ///
    /// ```
    /// use opening_status::{ClockTime, DayEntry, DayKey, WeeklySchedule};
    ///
    /// let nine = ClockTime::from_hm(9, 0).unwrap();
    /// let five = ClockTime::from_hm(17, 0).unwrap();
    /// let schedule = WeeklySchedule::new()
    ///     .with_entry(DayKey::Mon, DayEntry::interval(nine, five).unwrap())
    ///     .with_entry(DayKey::Fri, DayEntry::Appointment);
    /// assert_eq!(schedule.entries(DayKey::Mon).len(), 1);
    /// assert!(schedule.entries(DayKey::Tue).is_empty());
    /// ```
    pub fn with_entry(mut self, day: DayKey, entry: DayEntry) -> Self {
        self.push(day, entry);
        self
    }

    pub fn push(&mut self, day: DayKey, entry: DayEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Entries for `day` in insertion order; empty if the day is absent.
    pub fn entries(&self, day: DayKey) -> &[DayEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All entries, Sunday first, each day's entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayEntry)> + '_ {
        self.days
            .iter()
            .flat_map(|(day, entries)| entries.iter().map(move |entry| (*day, entry)))
    }

    /// True when no day has any entry.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Entries dropped while reading structured hours.
    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    /// Read a structured-hours JSON value.
    ///
    /// Keys other than the seven lowercase day keys, non-array day values and
    /// non-string entries are ignored. String entries that fail
    /// [`DayEntry::from_str`] are recorded in [`rejected`](Self::rejected).
    /// Any non-object value yields an empty schedule.
    pub fn from_structured(value: &Value) -> Self {
        let mut schedule = WeeklySchedule::new();
        let Value::Object(map) = value else {
            return schedule;
        };

        for (key, entries) in map {
            let Some(day) = DayKey::ALL.into_iter().find(|d| d.as_str() == key.as_str()) else {
                continue;
            };
            let Value::Array(items) = entries else {
                continue;
            };
            for item in items {
                let Value::String(text) = item else {
                    continue;
                };
                match text.parse::<DayEntry>() {
                    Ok(entry) => schedule.push(day, entry),
                    Err(reason) => schedule.rejected.push(RejectedEntry {
                        day,
                        text: text.clone(),
                        reason,
                    }),
                }
            }
        }
        schedule
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(WeeklySchedule::from_structured(&value))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
