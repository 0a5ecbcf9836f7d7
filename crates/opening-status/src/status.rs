//! Opening status resolution.
//!
//! [`resolve`] turns a [`WeeklySchedule`] and an explicit [`WeekMoment`] into
//! a [`StatusResult`]. It reads no clock, keeps no state, and never fails:
//! every input, however incomplete, yields a verdict.
//!
//! # Precedence
//!
//! Interval data always wins. A schedule with at least one interval resolves
//! to [`StatusResult::Open`] or [`StatusResult::Closed`] even when appointment
//! markers are present. Appointment markers only surface when the whole week
//! has no interval, and a week with neither resolves to
//! [`StatusResult::Unknown`].

use serde::Serialize;

use crate::clock::{ClockTime, DayKey, WeekMoment};
use crate::schedule::{DayEntry, WeeklySchedule};

/// An interval entry flattened out of a schedule and tagged with its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval {
    /// 0 (Sunday) to 6 (Saturday).
    pub day_index: usize,
    pub start: ClockTime,
    pub end: ClockTime,
    pub day: DayKey,
}

/// The opening status of a contact point at a given moment.
///
/// Serializes with a `status` tag:
/// `{"status":"open","closesAt":"17:00"}`,
/// `{"status":"closed","opensAt":"09:00","opensOn":"mon"}`,
/// `{"status":"appointment"}`, `{"status":"unknown"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResult {
    /// Open now; closes at `closes_at` today.
    #[serde(rename_all = "camelCase")]
    Open { closes_at: ClockTime },
    /// Closed now; next opens on `opens_on` at `opens_at`.
    #[serde(rename_all = "camelCase")]
    Closed { opens_at: ClockTime, opens_on: DayKey },
    /// No intervals, but open by arrangement.
    Appointment,
    /// No usable schedule data.
    Unknown,
}

/// Flatten a schedule into intervals sorted by `(day_index, start)`.
///
/// Appointment markers are skipped, as are intervals with `start >= end`
/// (which can only be built by constructing [`DayEntry::Interval`] directly).
pub fn resolved_intervals(schedule: &WeeklySchedule) -> Vec<ResolvedInterval> {
    let mut intervals: Vec<ResolvedInterval> = schedule
        .iter()
        .filter_map(|(day, entry)| match *entry {
            DayEntry::Interval { start, end } if start < end => Some(ResolvedInterval {
                day_index: day.index(),
                start,
                end,
                day,
            }),
            _ => None,
        })
        .collect();

    intervals.sort_by_key(|interval| (interval.day_index, interval.start));
    intervals
}

/// Resolve the opening status of `schedule` at `now`.
///
/// # Arguments
///
/// * `schedule` — The contact point's structured hours, if it has any
/// * `now` — The reference moment in the directory's local time
///
/// # Resolution
///
/// 1. No schedule → `Unknown`.
/// 2. No intervals → `Appointment` if any appointment marker exists, else `Unknown`.
/// 3. An interval today with `start <= now < end` → `Open` (the end minute is
///    already closed).
/// 4. Otherwise the first interval after `now` in the week (Sunday first) →
///    `Closed`.
/// 5. Otherwise `now` is past the week's last interval: `Closed` with the
///    week's first interval, i.e. next week.
///
/// # Examples
///
/// ```
/// use opening_status::{resolve, DayKey, StatusResult, WeekMoment, WeeklySchedule};
///
/// let schedule: WeeklySchedule =
///     serde_json::from_str(r#"{ "mon": ["09:00–17:00"] }"#).unwrap();
///
/// let monday_ten = WeekMoment::new(DayKey::Mon, 10 * 60).unwrap();
/// match resolve(Some(&schedule), monday_ten) {
///     StatusResult::Open { closes_at } => assert_eq!(closes_at.to_string(), "17:00"),
///     other => panic!("expected open, got {other:?}"),
/// }
///
/// assert_eq!(resolve(None, monday_ten), StatusResult::Unknown);
/// ```
pub fn resolve(schedule: Option<&WeeklySchedule>, now: WeekMoment) -> StatusResult {
    let Some(schedule) = schedule else {
        return StatusResult::Unknown;
    };

    let intervals = resolved_intervals(schedule);
    let has_appointment = schedule.iter().any(|(_, entry)| entry.is_appointment());

    if intervals.is_empty() {
        return without_intervals(has_appointment);
    }

    let today = now.weekday.index();
    let minutes = now.time;

    if let Some(open) = intervals
        .iter()
        .find(|i| i.day_index == today && i.start <= minutes && minutes < i.end)
    {
        return StatusResult::Open {
            closes_at: open.end,
        };
    }

    let next = intervals
        .iter()
        .find(|i| i.day_index > today || (i.day_index == today && i.start > minutes))
        .or_else(|| intervals.first());

    match next {
        Some(interval) => StatusResult::Closed {
            opens_at: interval.start,
            opens_on: interval.day,
        },
        None => without_intervals(has_appointment),
    }
}

fn without_intervals(has_appointment: bool) -> StatusResult {
    if has_appointment {
        StatusResult::Appointment
    } else {
        StatusResult::Unknown
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
