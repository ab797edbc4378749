//! Temporary reassignment model.
//!
//! A [`TemporaryReassignment`] is a date-scoped override redirecting one
//! shift or block occurrence from its baseline employee to another employee,
//! or to nobody (the occurrence lands in the replacements pool). The baseline
//! [`Assignment`](crate::models::Assignment) is never mutated; an override is
//! reversed by deleting it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Builds the overlay key identifying one shift/block occurrence on a date.
///
/// The key is dash-joined: `date-assignment_id-shift_id-block_id`, with an
/// empty final segment for shift-level occurrences.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::models::occurrence_key;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// assert_eq!(
///     occurrence_key(date, "ass-1", "shf-1", Some("blk-1")),
///     "2025-12-15-ass-1-shf-1-blk-1"
/// );
/// assert_eq!(
///     occurrence_key(date, "ass-1", "shf-1", None),
///     "2025-12-15-ass-1-shf-1-"
/// );
/// ```
pub fn occurrence_key(
    date: NaiveDate,
    assignment_id: &str,
    shift_id: &str,
    block_id: Option<&str>,
) -> String {
    format!(
        "{}-{}-{}-{}",
        date.format("%Y-%m-%d"),
        assignment_id,
        shift_id,
        block_id.unwrap_or("")
    )
}

/// A date-scoped override of one occurrence's effective employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporaryReassignment {
    /// Unique identifier for the override.
    pub id: String,
    /// The date the override applies to.
    pub date: NaiveDate,
    /// The assignment owning the redirected occurrence.
    pub assignment_id: String,
    /// The shift owning the redirected occurrence.
    pub shift_id: String,
    /// The specific block redirected; `None` redirects the whole shift.
    #[serde(default)]
    pub block_id: Option<String>,
    /// The employee the occurrence belonged to at creation time.
    #[serde(default)]
    pub original_employee_id: Option<String>,
    /// The employee now covering the occurrence; `None` leaves it unassigned.
    #[serde(default)]
    pub new_employee_id: Option<String>,
    /// When the override was created. Later overrides supersede earlier ones
    /// for the same key.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TemporaryReassignment {
    /// Creates a new override with a fresh id.
    pub fn new(
        date: NaiveDate,
        assignment_id: impl Into<String>,
        shift_id: impl Into<String>,
        block_id: Option<String>,
        original_employee_id: Option<String>,
        new_employee_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            assignment_id: assignment_id.into(),
            shift_id: shift_id.into(),
            block_id,
            original_employee_id,
            new_employee_id,
            created_at: Utc::now(),
        }
    }

    /// The overlay key this override is indexed under.
    pub fn key(&self) -> String {
        occurrence_key(
            self.date,
            &self.assignment_id,
            &self.shift_id,
            self.block_id.as_deref(),
        )
    }
}
