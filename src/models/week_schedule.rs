//! Week schedule output models.
//!
//! These records are the computed output of the week aggregator, consumed by
//! the transport collaborator as-is: one [`EmployeeSchedule`] per employee,
//! the [`ReplacementPool`] of work needing a driver, the business week dates,
//! the window's holidays, and the reassignment overlay index for
//! optimistic-state reconciliation on the drag-and-drop board.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Absence, Assignment, Employee, TemporaryReassignment, TemporaryTask};

/// One employee's computed week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    /// The employee this row describes.
    pub employee: Employee,
    /// The employee's baseline assignments (unmodified records).
    pub assignments: Vec<Assignment>,
    /// Circuit numbers of those assignments, in roster order.
    pub circuit_numbers: Vec<String>,
    /// The employee's temporary tasks within the window.
    pub temporary_tasks: Vec<TemporaryTask>,
    /// The employee's absences overlapping the window.
    pub absences: Vec<Absence>,
    /// Effective worked minutes per business date.
    pub daily_hours: BTreeMap<NaiveDate, i32>,
    /// Sum of the week's daily minutes.
    pub weekly_total: i32,
    /// The weekly total formatted `HH:MM`.
    pub weekly_total_formatted: String,
}

/// One work occurrence needing a driver on a specific date.
///
/// Serialized with a `type` tag matching the record kind, the way the
/// replacement board consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplacementItem {
    /// An assignment occurrence vacated by absence or reassignment.
    Assignment {
        /// The baseline assignment record.
        data: Assignment,
        /// The date the occurrence needs covering.
        date: NaiveDate,
        /// Name of the employee the occurrence belonged to.
        original_employee: String,
        /// The vacated shift, when the vacancy is occurrence-scoped.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shift_id: Option<String>,
        /// The vacated block, when the vacancy is block-scoped.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
    },
    /// A temporary task whose employee is absent that date.
    TemporaryTask {
        /// The task record.
        data: TemporaryTask,
        /// The date the task needs covering.
        date: NaiveDate,
        /// Name of the employee the task belonged to.
        original_employee: String,
    },
}

/// Work occurrences with no effective driver for the week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplacementPool {
    /// Assignments with no baseline employee at all.
    pub unassigned_assignments: Vec<Assignment>,
    /// Temporary tasks with no baseline employee.
    pub unassigned_tasks: Vec<TemporaryTask>,
    /// Occurrences vacated by absence or redirected to nobody.
    pub absent_items: Vec<ReplacementItem>,
}

/// The full computed schedule for one business week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// One entry per employee, in roster order.
    pub schedule: Vec<EmployeeSchedule>,
    /// Work needing a driver.
    pub replacements: ReplacementPool,
    /// The five business dates of the week, Monday first.
    pub week_dates: Vec<NaiveDate>,
    /// Holiday dates falling inside the window, sorted.
    pub holidays: Vec<NaiveDate>,
    /// The overlay index keyed by occurrence, as applied.
    pub reassignment_index: HashMap<String, TemporaryReassignment>,
}
