//! Holiday model.
//!
//! A [`Holiday`] zeroes every non-admin commitment on its date. The kind
//! distinguishes paid statutory holidays from unpaid closure days; the hour
//! effect is identical, only the display differs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Distinguishes paid holidays from unpaid closure days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Paid statutory holiday ("jour férié").
    #[default]
    Ferie,
    /// Unpaid closure day ("congé").
    Conge,
}

/// A calendar date on which normal shifts do not run.
///
/// Admin shifts are exempt and still contribute their fixed daily duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday.
    pub id: String,
    /// Display name, e.g. `"Noël"`.
    pub name: String,
    /// The holiday date.
    pub date: NaiveDate,
    /// Paid or unpaid. Legacy records without the field are paid.
    #[serde(default)]
    pub kind: HolidayKind,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Holiday {
    /// Creates a new paid holiday with a fresh id.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            kind: HolidayKind::Ferie,
            created_at: Utc::now(),
        }
    }
}
