//! Day label tables for presenting the day a contact point opens next.

use std::str::FromStr;

use crate::clock::DayKey;
use crate::error::ScheduleError;

/// Seven display labels in week order, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabels {
    labels: [&'static str; 7],
}

impl DayLabels {
    /// German two-letter abbreviations (`So`, `Mo`, ...).
    pub const GERMAN_SHORT: DayLabels =
        DayLabels::new(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]);

    pub const GERMAN_LONG: DayLabels = DayLabels::new([
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ]);

    pub const ENGLISH_SHORT: DayLabels =
        DayLabels::new(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    pub const ENGLISH_LONG: DayLabels = DayLabels::new([
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]);

    pub const fn new(labels: [&'static str; 7]) -> Self {
        DayLabels { labels }
    }

    pub fn label(&self, day: DayKey) -> &'static str {
        self.labels[day.index()]
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        DayLabels::GERMAN_SHORT
    }
}

impl FromStr for DayLabels {
    type Err = ScheduleError;

    /// `short` / `long` select the German tables, `en-short` / `en-long` the
    /// English ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "de-short" => Ok(DayLabels::GERMAN_SHORT),
            "long" | "de-long" => Ok(DayLabels::GERMAN_LONG),
            "en-short" => Ok(DayLabels::ENGLISH_SHORT),
            "en-long" => Ok(DayLabels::ENGLISH_LONG),
            _ => Err(ScheduleError::UnknownLabelSet(format!("'{}'", s))),
        }
    }
}
