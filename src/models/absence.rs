//! Absence model.
//!
//! An [`Absence`] removes an employee from duty over an inclusive date range.
//! The optional `shift_types` filter narrows the absence to specific shift
//! names (`AM`, `PM`, `MIDI`); an empty filter exempts every shift that date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee absence over an inclusive date range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::models::Absence;
///
/// let mut absence = Absence::new(
///     "emp-1",
///     NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 12, 16).unwrap(),
/// );
/// assert!(absence.exempts_shift("AM")); // empty filter exempts everything
///
/// absence.shift_types = vec!["AM".to_string()];
/// assert!(absence.exempts_shift("AM"));
/// assert!(!absence.exempts_shift("PM"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: String,
    /// The absent employee.
    pub employee_id: String,
    /// Denormalized employee name, cached at creation time.
    #[serde(default)]
    pub employee_name: String,
    /// First absent date (inclusive).
    pub start_date: NaiveDate,
    /// Last absent date (inclusive).
    pub end_date: NaiveDate,
    /// Free-form reason, e.g. `"Maladie"`.
    #[serde(default)]
    pub reason: String,
    /// Shift names exempted by this absence; empty exempts all shifts.
    #[serde(default)]
    pub shift_types: Vec<String>,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Absence {
    /// Creates a new full-day absence with a fresh id.
    pub fn new(employee_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.into(),
            employee_name: String::new(),
            start_date,
            end_date,
            reason: String::new(),
            shift_types: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Checks if a given date falls within the absence range (inclusive).
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this absence exempts the named shift type.
    ///
    /// An empty `shift_types` filter exempts every shift.
    pub fn exempts_shift(&self, shift_name: &str) -> bool {
        self.shift_types.is_empty() || self.shift_types.iter().any(|s| s == shift_name)
    }

    /// Returns true if the absence exempts all shifts (no filter).
    pub fn is_full_day(&self) -> bool {
        self.shift_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_covers_date_inclusive() {
        let absence = Absence::new("emp-1", make_date("2025-12-15"), make_date("2025-12-17"));
        assert!(absence.covers_date(make_date("2025-12-15")));
        assert!(absence.covers_date(make_date("2025-12-17")));
        assert!(!absence.covers_date(make_date("2025-12-18")));
    }

    #[test]
    fn test_empty_filter_is_full_day() {
        let absence = Absence::new("emp-1", make_date("2025-12-15"), make_date("2025-12-15"));
        assert!(absence.is_full_day());
        assert!(absence.exempts_shift("AM"));
        assert!(absence.exempts_shift("MIDI"));
    }

    #[test]
    fn test_filtered_absence_exempts_only_named_shifts() {
        let mut absence = Absence::new("emp-1", make_date("2025-12-15"), make_date("2025-12-15"));
        absence.shift_types = vec!["AM".to_string()];
        assert!(!absence.is_full_day());
        assert!(absence.exempts_shift("AM"));
        assert!(!absence.exempts_shift("PM"));
    }

    #[test]
    fn test_deserialize_legacy_absence_without_filter() {
        let json = r#"{
            "id": "abs-1",
            "employee_id": "emp-1",
            "employee_name": "HARVEY, Claude",
            "start_date": "2025-12-15",
            "end_date": "2025-12-16",
            "reason": "Maladie"
        }"#;
        let absence: Absence = serde_json::from_str(json).unwrap();
        assert!(absence.is_full_day());
        assert_eq!(absence.reason, "Maladie");
    }
}
