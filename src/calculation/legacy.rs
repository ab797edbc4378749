//! Legacy hour calculation, kept for parity with archived reports.
//!
//! Before the merge-based day resolver, daily minutes were the plain sum of
//! every block duration (HLP included) across every shift of every active
//! assignment, plus task durations. Overlapping windows are double-counted
//! and weekday applicability is ignored, by construction. Old hour reports
//! were printed from these figures; recomputing them must reproduce the
//! numbers exactly, so the formula survives here under its own name.
//!
//! New code wants [`resolve_day`](super::resolve_day) instead.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{Assignment, Shift, TemporaryTask};

use super::time_arith::to_minutes;

/// Sums a shift's minutes the historical way: block durations plus both HLP
/// buffers, no merging, no weekday filtering. Admin shifts report their
/// fixed daily duration.
pub fn legacy_shift_minutes(shift: &Shift, settings: &Settings) -> EngineResult<i32> {
    if shift.is_admin {
        return Ok(settings.admin_daily_minutes);
    }

    let mut total = 0;
    for block in &shift.blocks {
        let start = to_minutes(&block.start_time)?;
        let end = to_minutes(&block.end_time)?;
        total += (end - start) + block.hlp_before + block.hlp_after;
    }
    Ok(total)
}

/// Computes an employee's daily minutes the historical way.
///
/// Every shift of every assignment covering the date contributes its full
/// [`legacy_shift_minutes`] sum; every task dated that day contributes its
/// raw duration. No overlay, no absence or holiday handling: callers zeroed
/// the day themselves.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::calculation::legacy_daily_minutes;
/// use roster_engine::config::Settings;
/// use roster_engine::models::{Assignment, Block, Shift, TemporaryTask};
///
/// // Two overlapping 60-minute windows: the legacy sum reports 120.
/// let shift = Shift::new("AM", vec![
///     Block::new("09:00", "10:00", 0, 0),
///     Block::new("09:30", "10:30", 0, 0),
/// ]);
/// let mut assignment = Assignment::new(
///     "204",
///     vec![shift],
///     NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
/// );
/// assignment.employee_id = Some("emp-e".into());
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// let minutes = legacy_daily_minutes(&[assignment], &[], date, &Settings::default()).unwrap();
/// assert_eq!(minutes, 120);
/// ```
pub fn legacy_daily_minutes(
    assignments: &[Assignment],
    temporary_tasks: &[TemporaryTask],
    date: NaiveDate,
    settings: &Settings,
) -> EngineResult<i32> {
    let mut total = 0;

    for assignment in assignments.iter().filter(|a| a.covers_date(date)) {
        for shift in &assignment.shifts {
            total += legacy_shift_minutes(shift, settings)?;
        }
    }

    for task in temporary_tasks.iter().filter(|t| t.date == date) {
        let start = to_minutes(&task.start_time)?;
        let end = to_minutes(&task.end_time)?;
        total += end - start;
    }

    Ok(total)
}
