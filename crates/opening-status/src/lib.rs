//! # opening-status
//!
//! Deterministic opening-hours status for directory entries.
//!
//! Given a contact point's structured weekly hours and an explicit reference
//! moment, decide whether it is open, closed, by appointment only, or unknown,
//! and when it next opens or closes. No function here reads the system clock
//! or performs I/O; the caller supplies "now".
//!
//! ## Modules
//!
//! - [`clock`] — Weekday keys, `HH:MM` clock times, and the reference moment
//! - [`schedule`] — Weekly schedule model and tolerant structured-hours parsing
//! - [`status`] — Open/closed/appointment resolution
//! - [`labels`] — Day label tables for presentation
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod labels;
pub mod schedule;
pub mod status;

pub use clock::{ClockTime, DayKey, WeekMoment, MINUTES_PER_DAY};
pub use error::ScheduleError;
pub use labels::DayLabels;
pub use schedule::{DayEntry, RejectedEntry, WeeklySchedule, APPOINTMENT_MARKER};
pub use status::{resolve, resolved_intervals, ResolvedInterval, StatusResult};
