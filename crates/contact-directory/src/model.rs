//! Typed model of the directory JSON document.
//!
//! The document is an object keyed by county. County order is the order of
//! the keys in the file, which `serde_json`'s `preserve_order` keeps intact.

use std::fs;
use std::path::Path;

use opening_status::{resolve, StatusResult, WeekMoment, WeeklySchedule};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DirectoryError, Result};

/// All counties of a directory, in document order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    counties: Vec<County>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct County {
    pub key: String,
    pub full_name: String,
    pub contact_points: Vec<ContactPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountyRecord {
    full_name: String,
    #[serde(default)]
    contact_points: Vec<ContactPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub name: String,
    pub carrier: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub opening_hours: Option<OpeningHours>,
    pub social: Option<Social>,
    #[serde(default)]
    pub downloads: Vec<Download>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub web: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Social {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Download {
    pub url: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OpeningHours {
    /// Free-text hours as published.
    pub text: Option<String>,
    /// Extra note shown next to the hours (holidays, phone-first, ...).
    pub comment: Option<String>,
    pub structured: Option<WeeklySchedule>,
}

impl Directory {
    /// Parse a directory document.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Json`] if the text is not a JSON object, or
    /// [`DirectoryError::InvalidShape`] if a county entry lacks `fullName` or
    /// has malformed contact points.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(json)?;

        let mut counties = Vec::with_capacity(root.len());
        for (key, value) in root {
            let record: CountyRecord = serde_json::from_value(value)
                .map_err(|e| DirectoryError::InvalidShape(format!("county '{}': {}", key, e)))?;
            counties.push(County {
                key,
                full_name: record.full_name,
                contact_points: record.contact_points,
            });
        }

        let directory = Directory { counties };
        directory.report_rejected_entries();
        log::info!(
            "loaded {} counties with {} contact points",
            directory.counties.len(),
            directory.contact_point_count()
        );
        Ok(directory)
    }

    /// Read and parse a directory file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading directory from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    pub fn county(&self, key: &str) -> Option<&County> {
        self.counties.iter().find(|county| county.key == key)
    }

    pub fn contact_point_count(&self) -> usize {
        self.counties.iter().map(|c| c.contact_points.len()).sum()
    }

    fn report_rejected_entries(&self) {
        for county in &self.counties {
            for point in &county.contact_points {
                let Some(schedule) = point.schedule() else {
                    continue;
                };
                for rejected in schedule.rejected() {
                    log::warn!(
                        "{} / {}: ignoring opening hours entry {:?} on {}: {}",
                        county.key,
                        point.name,
                        rejected.text,
                        rejected.day,
                        rejected.reason
                    );
                }
            }
        }
    }
}

impl ContactPoint {
    /// The structured weekly hours, if published.
    pub fn schedule(&self) -> Option<&WeeklySchedule> {
        self.opening_hours.as_ref()?.structured.as_ref()
    }

    /// Opening status of this contact point at `now`.
    pub fn status(&self, now: WeekMoment) -> StatusResult {
        resolve(self.schedule(), now)
    }
}

/// `Some(trimmed)` when the value is present and not blank.
///
/// The published data uses empty strings and `null` interchangeably for
/// missing fields.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// ── Tests ───────────────────────────────────────────────────────────────────
