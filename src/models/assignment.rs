//! Assignment, shift, and block models.
//!
//! An [`Assignment`] binds a circuit (bus route) to at most one employee over
//! an inclusive date range and holds an ordered list of [`Shift`]s. Each
//! non-admin shift groups [`Block`]s, the individual scheduled time windows.
//! Assignments are the baseline truth of the roster: day-level deviations are
//! expressed as reassignment overlays, never as edits to these records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_school_color() -> String {
    "#4CAF50".to_string()
}

/// One committed time window inside a shift, tied to a pickup/drop-off.
///
/// Times are `HH:MM` strings parsed at computation time; `hlp_before` and
/// `hlp_after` are paid non-driving buffer minutes attached around the window.
/// `days` holds the weekday letters (`L`, `M`, `ME`, `J`, `V`) on which the
/// block runs; an empty set means every business day, which is what legacy
/// records that predate weekday filtering deserialize to.
///
/// # Example
///
/// ```
/// use roster_engine::models::Block;
///
/// let block = Block::new("07:30", "08:15", 10, 5);
/// assert!(block.applies_on("L"));
/// assert!(block.applies_on("V"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier for the block.
    pub id: String,
    /// The school this block serves.
    #[serde(default)]
    pub school_id: String,
    /// Denormalized school name, cached at creation time.
    #[serde(default)]
    pub school_name: String,
    /// Denormalized school display color.
    #[serde(default = "default_school_color")]
    pub school_color: String,
    /// Start of the window, `HH:MM`.
    pub start_time: String,
    /// End of the window, `HH:MM`.
    pub end_time: String,
    /// Paid buffer minutes before the window (HLP).
    #[serde(default)]
    pub hlp_before: i32,
    /// Paid buffer minutes after the window (HLP).
    #[serde(default)]
    pub hlp_after: i32,
    /// Weekday letters the block applies to; empty means every business day.
    #[serde(default)]
    pub days: Vec<String>,
}

impl Block {
    /// Creates a new block with a fresh id and no weekday restriction.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        hlp_before: i32,
        hlp_after: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            school_id: String::new(),
            school_name: String::new(),
            school_color: default_school_color(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            hlp_before,
            hlp_after,
            days: Vec::new(),
        }
    }

    /// Returns true if the block runs on the given weekday letter.
    ///
    /// An empty `days` set applies every business day.
    pub fn applies_on(&self, day_letter: &str) -> bool {
        self.days.is_empty() || self.days.iter().any(|d| d == day_letter)
    }
}

/// A named group of blocks (AM/PM/MIDI), or an admin shift.
///
/// An admin shift is not block-based: it contributes a fixed daily duration
/// (480 minutes by default), runs every business day regardless of weekday
/// filtering, and is exempt from holiday zeroing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Shift name: `AM`, `PM`, `MIDI`, or a label for admin shifts.
    pub name: String,
    /// The blocks grouped under this shift. Empty for admin shifts.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Marks a fixed-duration administrative shift.
    #[serde(default)]
    pub is_admin: bool,
}

impl Shift {
    /// Creates a new block-based shift with a fresh id.
    pub fn new(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            blocks,
            is_admin: false,
        }
    }

    /// Creates a new admin shift with a fresh id.
    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            blocks: Vec::new(),
            is_admin: true,
        }
    }
}

/// A circuit bound to at most one employee over an inclusive date range.
///
/// Overlapping ranges for the same employee are not prevented here; conflicts
/// are surfaced by the conflict detector before a commitment is persisted.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::models::Assignment;
///
/// let assignment = Assignment::new(
///     "204",
///     vec![],
///     NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
/// );
/// assert!(assignment.covers_date(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()));
/// assert!(!assignment.covers_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The circuit (route) number, e.g. `"204"`.
    pub circuit_number: String,
    /// Ordered shifts making up the circuit's day.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// The employee driving this circuit, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Denormalized employee name, cached at creation time.
    #[serde(default)]
    pub employee_name: String,
    /// First date the assignment is active (inclusive).
    pub start_date: NaiveDate,
    /// Last date the assignment is active (inclusive).
    pub end_date: NaiveDate,
    /// Marks a circuit adapted for reduced-mobility transport.
    #[serde(default)]
    pub is_adapted: bool,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Creates a new unassigned assignment with a fresh id.
    pub fn new(
        circuit_number: impl Into<String>,
        shifts: Vec<Shift>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            circuit_number: circuit_number.into(),
            shifts,
            employee_id: None,
            employee_name: String::new(),
            start_date,
            end_date,
            is_adapted: false,
            created_at: Utc::now(),
        }
    }

    /// Checks if a given date falls within the assignment's active range.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the circuit number parsed as an integer, when it is numeric.
    ///
    /// Used for roster ordering; circuits like `"204"` sort numerically while
    /// non-numeric circuits fall back to lexicographic order.
    pub fn numeric_circuit(&self) -> Option<u32> {
        self.circuit_number.parse().ok()
    }
}
