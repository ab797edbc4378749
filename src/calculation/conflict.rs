//! Conflict detection.
//!
//! Tests a candidate commitment against an employee's existing assignments
//! and same-date temporary tasks *before* the commitment is persisted. A
//! small tolerance (5 minutes by default) keeps back-to-back runs with a
//! shared boundary from being flagged; anything beyond it is reported with
//! the offending record and the overlap amount.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{Assignment, Conflict, ConflictReport, TemporaryTask};

use super::time_arith::to_minutes;

/// Checks a candidate interval for conflicts with existing commitments.
///
/// Scans every assignment of the employee covering the date (each block's
/// interval widened by its HLP buffers) and every same-date temporary task
/// (unbuffered). An overlap strictly greater than
/// `settings.conflict_tolerance_minutes` produces a conflict entry.
///
/// Weekday applicability is deliberately not consulted: the detector errs on
/// the side of caution and flags blocks even on days they do not run.
///
/// `exclude_id` lets an in-place update ignore its own prior record.
/// Candidate times parse strictly; malformed input is a
/// [`TimeParse`](crate::error::EngineError::TimeParse) error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::calculation::check_conflict;
/// use roster_engine::config::Settings;
///
/// let report = check_conflict(
///     "emp-e",
///     NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
///     "09:00",
///     "10:00",
///     None,
///     &[],
///     &[],
///     &Settings::default(),
/// ).unwrap();
/// assert!(!report.conflict);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn check_conflict(
    employee_id: &str,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
    exclude_id: Option<&str>,
    assignments: &[Assignment],
    temporary_tasks: &[TemporaryTask],
    settings: &Settings,
) -> EngineResult<ConflictReport> {
    let new_start = to_minutes(start_time)?;
    let new_end = to_minutes(end_time)?;
    let tolerance = settings.conflict_tolerance_minutes;

    let mut conflicts = Vec::new();

    for assignment in assignments
        .iter()
        .filter(|a| a.employee_id.as_deref() == Some(employee_id))
    {
        if exclude_id == Some(assignment.id.as_str()) {
            continue;
        }
        if !assignment.covers_date(date) {
            continue;
        }

        for shift in &assignment.shifts {
            for block in &shift.blocks {
                let block_start = to_minutes(&block.start_time)? - block.hlp_before;
                let block_end = to_minutes(&block.end_time)? + block.hlp_after;

                let overlap = new_end.min(block_end) - new_start.max(block_start);
                if overlap > tolerance {
                    conflicts.push(Conflict::Assignment {
                        assignment_id: assignment.id.clone(),
                        circuit: assignment.circuit_number.clone(),
                        shift: shift.name.clone(),
                        block_time: format!("{}-{}", block.start_time, block.end_time),
                        overlap_minutes: overlap,
                    });
                }
            }
        }
    }

    for task in temporary_tasks
        .iter()
        .filter(|t| t.employee_id.as_deref() == Some(employee_id) && t.date == date)
    {
        if exclude_id == Some(task.id.as_str()) {
            continue;
        }
        let task_start = to_minutes(&task.start_time)?;
        let task_end = to_minutes(&task.end_time)?;

        let overlap = new_end.min(task_end) - new_start.max(task_start);
        if overlap > tolerance {
            conflicts.push(Conflict::TemporaryTask {
                task_id: task.id.clone(),
                task_name: task.name.clone(),
                task_time: format!("{}-{}", task.start_time, task.end_time),
                overlap_minutes: overlap,
            });
        }
    }

    debug!(
        employee_id,
        %date,
        conflicts = conflicts.len(),
        "conflict check complete"
    );

    Ok(ConflictReport::from_conflicts(conflicts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, Shift};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn assignment_with_block(
        employee_id: &str,
        start: &str,
        end: &str,
        hlp_before: i32,
        hlp_after: i32,
    ) -> Assignment {
        let block = Block::new(start, end, hlp_before, hlp_after);
        let shift = Shift::new("AM", vec![block]);
        let mut assignment = Assignment::new(
            "204",
            vec![shift],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.employee_id = Some(employee_id.to_string());
        assignment
    }

    fn check(
        start: &str,
        end: &str,
        exclude_id: Option<&str>,
        assignments: &[Assignment],
        tasks: &[TemporaryTask],
    ) -> ConflictReport {
        check_conflict(
            "emp-e",
            make_date("2025-12-15"),
            start,
            end,
            exclude_id,
            assignments,
            tasks,
            &Settings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_no_commitments_no_conflict() {
        let report = check("09:00", "10:00", None, &[], &[]);
        assert!(!report.conflict);
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn test_five_minute_overlap_tolerated() {
        // Block 08:00-09:00; candidate 08:55-10:00 overlaps exactly 5 min.
        let assignments = [assignment_with_block("emp-e", "08:00", "09:00", 0, 0)];
        let report = check("08:55", "10:00", None, &assignments, &[]);
        assert!(!report.conflict);
    }

    #[test]
    fn test_six_minute_overlap_reported() {
        let assignments = [assignment_with_block("emp-e", "08:00", "09:00", 0, 0)];
        let report = check("08:54", "10:00", None, &assignments, &[]);
        assert!(report.conflict);
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].overlap_minutes(), 6);
        match &report.conflicts[0] {
            Conflict::Assignment {
                circuit,
                shift,
                block_time,
                ..
            } => {
                assert_eq!(circuit, "204");
                assert_eq!(shift, "AM");
                assert_eq!(block_time, "08:00-09:00");
            }
            other => panic!("expected assignment conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_buffers_extend_the_block() {
        // Block 08:00-09:00 with 15 min after-buffer reaches 09:15; a
        // candidate at 09:05 overlaps 10 minutes.
        let assignments = [assignment_with_block("emp-e", "08:00", "09:00", 0, 15)];
        let report = check("09:05", "10:00", None, &assignments, &[]);
        assert!(report.conflict);
        assert_eq!(report.conflicts[0].overlap_minutes(), 10);
    }

    #[test]
    fn test_other_employees_commitments_ignored() {
        let assignments = [assignment_with_block("emp-f", "08:00", "09:00", 0, 0)];
        let report = check("08:00", "09:00", None, &assignments, &[]);
        assert!(!report.conflict);
    }

    #[test]
    fn test_assignment_outside_date_range_ignored() {
        let mut assignment = assignment_with_block("emp-e", "08:00", "09:00", 0, 0);
        assignment.start_date = make_date("2026-01-01");
        assignment.end_date = make_date("2026-06-30");
        let report = check("08:00", "09:00", None, &[assignment], &[]);
        assert!(!report.conflict);
    }

    #[test]
    fn test_exclude_id_skips_own_record() {
        let assignments = [assignment_with_block("emp-e", "08:00", "09:00", 0, 0)];
        let id = assignments[0].id.clone();
        let report = check("08:00", "09:00", Some(&id), &assignments, &[]);
        assert!(!report.conflict);
    }

    #[test]
    fn test_same_date_task_conflicts_unbuffered() {
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "09:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        let report = check("10:00", "12:00", None, &[], &[task]);
        assert!(report.conflict);
        match &report.conflicts[0] {
            Conflict::TemporaryTask {
                task_name,
                task_time,
                overlap_minutes,
                ..
            } => {
                assert_eq!(task_name, "Sortie");
                assert_eq!(task_time, "09:00-11:00");
                assert_eq!(*overlap_minutes, 60);
            }
            other => panic!("expected task conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_task_on_other_date_ignored() {
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-16"), "09:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        let report = check("09:00", "11:00", None, &[], &[task]);
        assert!(!report.conflict);
    }

    #[test]
    fn test_multiple_conflicts_all_reported() {
        let assignments = [assignment_with_block("emp-e", "08:00", "09:00", 0, 0)];
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "08:30", "09:30");
        task.employee_id = Some("emp-e".to_string());
        let report = check("08:00", "09:30", None, &assignments, &[task]);
        assert_eq!(report.conflicts.len(), 2);
    }

    #[test]
    fn test_malformed_candidate_time_is_parse_error() {
        let result = check_conflict(
            "emp-e",
            make_date("2025-12-15"),
            "morning",
            "10:00",
            None,
            &[],
            &[],
            &Settings::default(),
        );
        assert!(result.is_err());
    }
}
