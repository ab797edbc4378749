//! Per-day commitment resolution.
//!
//! Resolves one employee's effective committed minutes for one date: the
//! baseline assignments filtered by date range and weekday, redirected
//! through the reassignment overlay, trimmed by absences and holidays, with
//! the surviving windows merged so overlapping commitments are counted once.
//!
//! Admin shifts are handled outside the merge: they contribute a fixed daily
//! duration that neither overlaps nor absorbs real time windows, and they
//! survive holiday zeroing.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{Absence, Assignment, TemporaryTask};

use super::interval_merge::{Interval, merge_intervals, total_minutes};
use super::overlay::OverlayIndex;
use super::time_arith::to_minutes_lenient;

/// Maps a date to its business-weekday letter.
///
/// Monday through Friday map to `L`, `M`, `ME`, `J`, `V`; weekend dates have
/// no letter and resolve to zero commitments.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::calculation::weekday_letter;
///
/// // 2025-12-15 is a Monday.
/// let monday = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// assert_eq!(weekday_letter(monday), Some("L"));
///
/// // 2025-12-20 is a Saturday.
/// let saturday = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
/// assert_eq!(weekday_letter(saturday), None);
/// ```
pub fn weekday_letter(date: NaiveDate) -> Option<&'static str> {
    match date.weekday() {
        Weekday::Mon => Some("L"),
        Weekday::Tue => Some("M"),
        Weekday::Wed => Some("ME"),
        Weekday::Thu => Some("J"),
        Weekday::Fri => Some("V"),
        Weekday::Sat | Weekday::Sun => None,
    }
}

/// One employee's resolved commitments for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResolution {
    /// Merged non-admin commitment windows, disjoint and ordered.
    pub intervals: Vec<Interval>,
    /// Fixed minutes contributed by admin shifts, summed outside the merge.
    pub admin_minutes: i32,
    /// True when an absence removed the day's temporary tasks as well.
    pub tasks_excluded: bool,
    /// The day's total worked minutes.
    pub total_minutes: i32,
}

impl DayResolution {
    fn empty() -> Self {
        Self {
            intervals: Vec::new(),
            admin_minutes: 0,
            tasks_excluded: false,
            total_minutes: 0,
        }
    }
}

/// Resolves one employee's effective committed minutes for one date.
///
/// Takes the full collections; occurrences are attributed to the employee by
/// their *effective* post-overlay employee, so a block redirected to this
/// employee from someone else's assignment counts here and a block
/// redirected away does not.
///
/// Rules, in order:
///
/// 1. Weekend dates resolve to zero.
/// 2. Assignments covering the date contribute per occurrence: admin shifts a
///    fixed duration, non-admin blocks `[start - hlp_before, end + hlp_after]`
///    when their weekday set includes today.
/// 3. Temporary tasks dated today contribute `[start, end]`, unbuffered.
/// 4. An absence exempts the shifts its filter names (all shifts when the
///    filter is empty); when every applicable occurrence is exempted the
///    day's temporary tasks are excluded too.
/// 5. A holiday zeroes every non-admin commitment; admin shifts still count.
/// 6. Surviving windows are merged so overlap is counted once.
///
/// Block and task times parse leniently: an empty string reads as midnight
/// rather than failing, since these fields are optional on incoming records.
#[allow(clippy::too_many_arguments)]
pub fn resolve_day(
    employee_id: &str,
    date: NaiveDate,
    assignments: &[Assignment],
    temporary_tasks: &[TemporaryTask],
    absences: &[Absence],
    holiday_dates: &HashSet<NaiveDate>,
    overlay: &OverlayIndex,
    settings: &Settings,
) -> EngineResult<DayResolution> {
    let Some(letter) = weekday_letter(date) else {
        return Ok(DayResolution::empty());
    };

    let is_holiday = holiday_dates.contains(&date);
    let day_absences: Vec<&Absence> = absences
        .iter()
        .filter(|a| a.employee_id == employee_id && a.covers_date(date))
        .collect();
    let full_day_absent = day_absences.iter().any(|a| a.is_full_day());

    let mut raw = Vec::new();
    let mut admin_minutes = 0;
    let mut applicable = 0usize;
    let mut exempted = 0usize;

    for assignment in assignments.iter().filter(|a| a.covers_date(date)) {
        for shift in &assignment.shifts {
            let absence_exempts = day_absences.iter().any(|a| a.exempts_shift(&shift.name));

            if shift.is_admin {
                if overlay.effective_shift_employee(date, assignment, &shift.id)
                    != Some(employee_id)
                {
                    continue;
                }
                applicable += 1;
                if absence_exempts {
                    exempted += 1;
                    continue;
                }
                admin_minutes += settings.admin_daily_minutes;
            } else {
                for block in &shift.blocks {
                    if !block.applies_on(letter) {
                        continue;
                    }
                    if overlay.effective_block_employee(date, assignment, &shift.id, &block.id)
                        != Some(employee_id)
                    {
                        continue;
                    }
                    applicable += 1;
                    if absence_exempts {
                        exempted += 1;
                        continue;
                    }
                    if is_holiday {
                        continue;
                    }
                    let start = to_minutes_lenient(&block.start_time)?;
                    let end = to_minutes_lenient(&block.end_time)?;
                    raw.push(Interval::new(start - block.hlp_before, end + block.hlp_after));
                }
            }
        }
    }

    let tasks_excluded = full_day_absent || (applicable > 0 && exempted == applicable);

    if !tasks_excluded && !is_holiday {
        for task in temporary_tasks
            .iter()
            .filter(|t| t.date == date && t.employee_id.as_deref() == Some(employee_id))
        {
            let start = to_minutes_lenient(&task.start_time)?;
            let end = to_minutes_lenient(&task.end_time)?;
            raw.push(Interval::new(start, end));
        }
    }

    let intervals = merge_intervals(raw);
    let total = total_minutes(&intervals) + admin_minutes;

    Ok(DayResolution {
        intervals,
        admin_minutes,
        tasks_excluded,
        total_minutes: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, Shift};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Circuit 204, shift AM, one block 07:30-08:15 with HLP 10/5 (60 min).
    fn circuit_204(employee_id: &str) -> Assignment {
        let mut block = Block::new("07:30", "08:15", 10, 5);
        block.id = "blk-1".to_string();
        let mut shift = Shift::new("AM", vec![block]);
        shift.id = "shf-am".to_string();
        let mut assignment = Assignment::new(
            "204",
            vec![shift],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.id = "ass-204".to_string();
        assignment.employee_id = Some(employee_id.to_string());
        assignment
    }

    fn resolve(
        employee_id: &str,
        date: &str,
        assignments: &[Assignment],
        tasks: &[TemporaryTask],
        absences: &[Absence],
        holidays: &[&str],
    ) -> DayResolution {
        let holiday_dates: HashSet<NaiveDate> = holidays.iter().map(|d| make_date(d)).collect();
        resolve_day(
            employee_id,
            make_date(date),
            assignments,
            tasks,
            absences,
            &holiday_dates,
            &OverlayIndex::default(),
            &Settings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_weekday_letters() {
        assert_eq!(weekday_letter(make_date("2025-12-15")), Some("L"));
        assert_eq!(weekday_letter(make_date("2025-12-16")), Some("M"));
        assert_eq!(weekday_letter(make_date("2025-12-17")), Some("ME"));
        assert_eq!(weekday_letter(make_date("2025-12-18")), Some("J"));
        assert_eq!(weekday_letter(make_date("2025-12-19")), Some("V"));
        assert_eq!(weekday_letter(make_date("2025-12-20")), None);
        assert_eq!(weekday_letter(make_date("2025-12-21")), None);
    }

    #[test]
    fn test_buffered_block_duration() {
        let assignments = [circuit_204("emp-e")];
        let resolution = resolve("emp-e", "2025-12-15", &assignments, &[], &[], &[]);
        // 45 minute block + 10 before + 5 after.
        assert_eq!(resolution.intervals, vec![Interval::new(440, 500)]);
        assert_eq!(resolution.total_minutes, 60);
    }

    #[test]
    fn test_weekend_resolves_to_zero() {
        let assignments = [circuit_204("emp-e")];
        let resolution = resolve("emp-e", "2025-12-20", &assignments, &[], &[], &[]);
        assert_eq!(resolution.total_minutes, 0);
    }

    #[test]
    fn test_assignment_out_of_range_contributes_nothing() {
        let assignments = [circuit_204("emp-e")];
        // 2026-01-05 is a Monday but past end_date.
        let resolution = resolve("emp-e", "2026-01-05", &assignments, &[], &[], &[]);
        assert_eq!(resolution.total_minutes, 0);
    }

    #[test]
    fn test_block_weekday_filter() {
        let mut assignment = circuit_204("emp-e");
        assignment.shifts[0].blocks[0].days = vec!["L".to_string(), "ME".to_string()];
        let assignments = [assignment];

        let monday = resolve("emp-e", "2025-12-15", &assignments, &[], &[], &[]);
        assert_eq!(monday.total_minutes, 60);

        let tuesday = resolve("emp-e", "2025-12-16", &assignments, &[], &[], &[]);
        assert_eq!(tuesday.total_minutes, 0);
    }

    #[test]
    fn test_overlapping_block_and_task_counted_once() {
        let assignments = [circuit_204("emp-e")];
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "08:00", "09:00");
        task.employee_id = Some("emp-e".to_string());
        let resolution = resolve("emp-e", "2025-12-15", &assignments, &[task], &[], &[]);
        // Block covers [07:20, 08:20], task [08:00, 09:00]; union is 100 min.
        assert_eq!(resolution.intervals, vec![Interval::new(440, 540)]);
        assert_eq!(resolution.total_minutes, 100);
    }

    #[test]
    fn test_admin_shift_fixed_duration() {
        let mut admin = Shift::admin("Bureau");
        admin.id = "shf-adm".to_string();
        let mut assignment = Assignment::new(
            "ADM",
            vec![admin],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.employee_id = Some("emp-a".to_string());
        let assignments = [assignment];

        let resolution = resolve("emp-a", "2025-12-15", &assignments, &[], &[], &[]);
        assert_eq!(resolution.admin_minutes, 480);
        assert_eq!(resolution.total_minutes, 480);
        assert!(resolution.intervals.is_empty());
    }

    #[test]
    fn test_admin_shift_survives_holiday() {
        let mut admin = Shift::admin("Bureau");
        admin.id = "shf-adm".to_string();
        let mut assignment = Assignment::new(
            "ADM",
            vec![admin],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.employee_id = Some("emp-a".to_string());
        let assignments = [assignment];

        let resolution = resolve(
            "emp-a",
            "2025-12-15",
            &assignments,
            &[],
            &[],
            &["2025-12-15"],
        );
        assert_eq!(resolution.total_minutes, 480);
    }

    #[test]
    fn test_admin_does_not_absorb_real_block() {
        // A real block inside 06:00-14:00 must count on top of the admin
        // duration, not merge into it.
        let mut admin = Shift::admin("Bureau");
        admin.id = "shf-adm".to_string();
        let mut block = Block::new("08:00", "09:00", 0, 0);
        block.id = "blk-x".to_string();
        let mut am = Shift::new("AM", vec![block]);
        am.id = "shf-am".to_string();
        let mut assignment = Assignment::new(
            "205",
            vec![admin, am],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.employee_id = Some("emp-a".to_string());
        let assignments = [assignment];

        let resolution = resolve("emp-a", "2025-12-15", &assignments, &[], &[], &[]);
        assert_eq!(resolution.admin_minutes, 480);
        assert_eq!(resolution.total_minutes, 540);
    }

    #[test]
    fn test_holiday_zeroes_blocks_and_tasks() {
        let assignments = [circuit_204("emp-e")];
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "10:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        let resolution = resolve(
            "emp-e",
            "2025-12-15",
            &assignments,
            &[task],
            &[],
            &["2025-12-15"],
        );
        assert_eq!(resolution.total_minutes, 0);
    }

    #[test]
    fn test_full_day_absence_zeroes_everything() {
        let assignments = [circuit_204("emp-e")];
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "10:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        let absence = Absence::new("emp-e", make_date("2025-12-15"), make_date("2025-12-15"));

        let resolution = resolve(
            "emp-e",
            "2025-12-15",
            &assignments,
            &[task],
            &[absence],
            &[],
        );
        assert!(resolution.tasks_excluded);
        assert_eq!(resolution.total_minutes, 0);
    }

    #[test]
    fn test_filtered_absence_zeroes_only_named_shift() {
        // AM 07:30-08:15 (45 min) and PM 15:00-16:00 (60 min), absence on AM only.
        let mut am_block = Block::new("07:30", "08:15", 0, 0);
        am_block.id = "blk-am".to_string();
        let mut am = Shift::new("AM", vec![am_block]);
        am.id = "shf-am".to_string();
        let mut pm_block = Block::new("15:00", "16:00", 0, 0);
        pm_block.id = "blk-pm".to_string();
        let mut pm = Shift::new("PM", vec![pm_block]);
        pm.id = "shf-pm".to_string();
        let mut assignment = Assignment::new(
            "204",
            vec![am, pm],
            make_date("2025-12-01"),
            make_date("2025-12-31"),
        );
        assignment.employee_id = Some("emp-e".to_string());
        let assignments = [assignment];

        let mut absence = Absence::new("emp-e", make_date("2025-12-15"), make_date("2025-12-15"));
        absence.shift_types = vec!["AM".to_string()];

        let resolution = resolve("emp-e", "2025-12-15", &assignments, &[], &[absence], &[]);
        assert_eq!(resolution.total_minutes, 60);
        assert!(!resolution.tasks_excluded);
    }

    #[test]
    fn test_absence_covering_every_shift_excludes_tasks() {
        let assignments = [circuit_204("emp-e")];
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "10:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        // The only shift that day is AM; filtering AM removes the tasks too.
        let mut absence = Absence::new("emp-e", make_date("2025-12-15"), make_date("2025-12-15"));
        absence.shift_types = vec!["AM".to_string()];

        let resolution = resolve(
            "emp-e",
            "2025-12-15",
            &assignments,
            &[task],
            &[absence],
            &[],
        );
        assert!(resolution.tasks_excluded);
        assert_eq!(resolution.total_minutes, 0);
    }

    #[test]
    fn test_filtered_absence_without_shifts_keeps_tasks() {
        let mut task = TemporaryTask::new("Sortie", make_date("2025-12-15"), "10:00", "11:00");
        task.employee_id = Some("emp-e".to_string());
        let mut absence = Absence::new("emp-e", make_date("2025-12-15"), make_date("2025-12-15"));
        absence.shift_types = vec!["AM".to_string()];

        let resolution = resolve("emp-e", "2025-12-15", &[], &[task], &[absence], &[]);
        assert!(!resolution.tasks_excluded);
        assert_eq!(resolution.total_minutes, 60);
    }

    #[test]
    fn test_overlay_redirects_minutes_between_employees() {
        let assignment = circuit_204("emp-e");
        let reassignment = crate::models::TemporaryReassignment::new(
            make_date("2025-12-15"),
            "ass-204",
            "shf-am",
            Some("blk-1".to_string()),
            Some("emp-e".to_string()),
            Some("emp-f".to_string()),
        );
        let overlay = OverlayIndex::build(&[reassignment]);
        let holiday_dates = HashSet::new();
        let settings = Settings::default();
        let assignments = [assignment];

        let e = resolve_day(
            "emp-e",
            make_date("2025-12-15"),
            &assignments,
            &[],
            &[],
            &holiday_dates,
            &overlay,
            &settings,
        )
        .unwrap();
        let f = resolve_day(
            "emp-f",
            make_date("2025-12-15"),
            &assignments,
            &[],
            &[],
            &holiday_dates,
            &overlay,
            &settings,
        )
        .unwrap();

        assert_eq!(e.total_minutes, 0);
        assert_eq!(f.total_minutes, 60);
    }

    #[test]
    fn test_empty_time_strings_read_as_midnight() {
        let mut assignment = circuit_204("emp-e");
        assignment.shifts[0].blocks[0].start_time = String::new();
        assignment.shifts[0].blocks[0].end_time = String::new();
        assignment.shifts[0].blocks[0].hlp_before = 0;
        assignment.shifts[0].blocks[0].hlp_after = 0;
        let assignments = [assignment];

        let resolution = resolve("emp-e", "2025-12-15", &assignments, &[], &[], &[]);
        assert_eq!(resolution.total_minutes, 0);
    }
}
