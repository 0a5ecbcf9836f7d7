//! Error types for opening-status operations.

use thiserror::Error;

use crate::clock::ClockTime;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Empty interval: start {start} is not before end {end}")]
    EmptyInterval { start: ClockTime, end: ClockTime },

    #[error("Invalid moment: {0}")]
    InvalidMoment(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Unknown label set: {0}")]
    UnknownLabelSet(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
