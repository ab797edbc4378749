//! Temporary task model.
//!
//! A [`TemporaryTask`] is a one-off, single-date, single-interval commitment
//! bound to at most one employee, independent of any assignment. Tasks carry
//! no HLP buffers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_school_color() -> String {
    "#9E9E9E".to_string()
}

/// A one-off commitment for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporaryTask {
    /// Unique identifier for the task.
    pub id: String,
    /// Task label, e.g. `"Sortie piscine"`.
    pub name: String,
    /// The single date the task takes place.
    pub date: NaiveDate,
    /// Start of the task, `HH:MM`.
    pub start_time: String,
    /// End of the task, `HH:MM`.
    pub end_time: String,
    /// The employee carrying out the task, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Denormalized employee name, cached at creation time.
    #[serde(default)]
    pub employee_name: String,
    /// The school the task relates to, if any.
    #[serde(default)]
    pub school_id: Option<String>,
    /// Denormalized school name.
    #[serde(default)]
    pub school_name: String,
    /// Denormalized school display color.
    #[serde(default = "default_school_color")]
    pub school_color: String,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TemporaryTask {
    /// Creates a new unassigned task with a fresh id.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            employee_id: None,
            employee_name: String::new(),
            school_id: None,
            school_name: String::new(),
            school_color: default_school_color(),
            created_at: Utc::now(),
        }
    }
}
