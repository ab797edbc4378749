//! Week aggregation.
//!
//! Drives the day resolver across the five business dates of a week for
//! every employee, rolls daily minutes into weekly totals, and builds the
//! replacements pool of work occurrences left without a driver: unassigned
//! baseline records, occurrences vacated by an absence, and occurrences a
//! reassignment redirected to nobody.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, Duration, Local, NaiveDate};
use tracing::info;

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{
    Absence, Assignment, EmployeeSchedule, ReplacementItem, ReplacementPool, WeekSchedule,
};
use crate::store::Snapshot;

use super::day_resolver::{resolve_day, weekday_letter};
use super::overlay::OverlayIndex;
use super::time_arith::format_duration;

/// Normalizes a date to the Monday of its week.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::calculation::week_start_monday;
///
/// // 2025-12-17 is a Wednesday.
/// let wednesday = NaiveDate::from_ymd_opt(2025, 12, 17).unwrap();
/// assert_eq!(
///     week_start_monday(wednesday),
///     NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
/// );
/// ```
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The five business dates (Monday through Friday) of the week containing
/// `week_start`.
pub fn business_week(week_start: NaiveDate) -> Vec<NaiveDate> {
    let monday = week_start_monday(week_start);
    (0..5).map(|i| monday + Duration::days(i)).collect()
}

/// The Monday of the current local week, for callers that default the window.
pub fn current_week_start() -> NaiveDate {
    week_start_monday(Local::now().date_naive())
}

/// Roster ordering key: numeric circuits ascending, then non-numeric
/// circuits lexicographically, then employees with no circuit at all.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CircuitKey {
    Numeric(u32),
    Text(String),
    Unassigned,
}

fn circuit_key(assignments: &[Assignment]) -> CircuitKey {
    assignments
        .iter()
        .map(|a| match a.numeric_circuit() {
            Some(n) => CircuitKey::Numeric(n),
            None => CircuitKey::Text(a.circuit_number.clone()),
        })
        .min()
        .unwrap_or(CircuitKey::Unassigned)
}

fn absent_for(absences: &[Absence], employee_id: &str, date: NaiveDate, shift_name: &str) -> bool {
    absences
        .iter()
        .any(|a| a.employee_id == employee_id && a.covers_date(date) && a.exempts_shift(shift_name))
}

/// Computes the full schedule for the business week containing `week_start`.
///
/// Each employee's row carries their baseline records plus the computed
/// `daily_hours` and weekly total; minutes follow the *effective* post-overlay
/// employee, so a reassigned block counts for its stand-in driver, not the
/// baseline one. Rows are ordered by lowest circuit number, then name.
///
/// The replacements pool lists work without an effective driver; the overlay
/// index is echoed back for the caller's optimistic-state reconciliation.
pub fn compute_week_schedule(
    snapshot: &Snapshot,
    week_start: NaiveDate,
    settings: &Settings,
) -> EngineResult<WeekSchedule> {
    let week_dates = business_week(week_start);
    let overlay = OverlayIndex::build(&snapshot.reassignments);
    let holiday_dates: HashSet<NaiveDate> = snapshot.holidays.iter().map(|h| h.date).collect();
    let names: HashMap<&str, &str> = snapshot
        .employees
        .iter()
        .map(|e| (e.id.as_str(), e.name.as_str()))
        .collect();

    info!(
        week_start = %week_dates[0],
        employees = snapshot.employees.len(),
        assignments = snapshot.assignments.len(),
        overrides = overlay.len(),
        "computing week schedule"
    );

    // tasks_excluded per (employee, date), reused by the pool scan below.
    let mut tasks_excluded: HashMap<(&str, NaiveDate), bool> = HashMap::new();

    let mut schedule = Vec::with_capacity(snapshot.employees.len());
    for employee in &snapshot.employees {
        let mut daily_hours = BTreeMap::new();
        let mut weekly_total = 0;

        for &date in &week_dates {
            let resolution = resolve_day(
                &employee.id,
                date,
                &snapshot.assignments,
                &snapshot.temporary_tasks,
                &snapshot.absences,
                &holiday_dates,
                &overlay,
                settings,
            )?;
            daily_hours.insert(date, resolution.total_minutes);
            weekly_total += resolution.total_minutes;
            tasks_excluded.insert((employee.id.as_str(), date), resolution.tasks_excluded);
        }

        let assignments: Vec<Assignment> = snapshot
            .assignments
            .iter()
            .filter(|a| a.employee_id.as_deref() == Some(employee.id.as_str()))
            .cloned()
            .collect();

        let mut circuit_numbers: Vec<String> =
            assignments.iter().map(|a| a.circuit_number.clone()).collect();
        circuit_numbers.sort_by_key(|c| match c.parse::<u32>() {
            Ok(n) => CircuitKey::Numeric(n),
            Err(_) => CircuitKey::Text(c.clone()),
        });
        circuit_numbers.dedup();

        let temporary_tasks = snapshot
            .temporary_tasks
            .iter()
            .filter(|t| t.employee_id.as_deref() == Some(employee.id.as_str()))
            .cloned()
            .collect();
        let absences = snapshot
            .absences
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .cloned()
            .collect();

        schedule.push(EmployeeSchedule {
            employee: employee.clone(),
            assignments,
            circuit_numbers,
            temporary_tasks,
            absences,
            daily_hours,
            weekly_total,
            weekly_total_formatted: format_duration(weekly_total),
        });
    }

    schedule.sort_by_cached_key(|entry| {
        (circuit_key(&entry.assignments), entry.employee.name.clone())
    });

    let replacements = build_replacement_pool(
        snapshot,
        &week_dates,
        &holiday_dates,
        &overlay,
        &names,
        &tasks_excluded,
    );

    let mut holidays: Vec<NaiveDate> = holiday_dates
        .iter()
        .copied()
        .filter(|d| *d >= week_dates[0] && *d <= week_dates[4])
        .collect();
    holidays.sort();

    Ok(WeekSchedule {
        schedule,
        replacements,
        week_dates,
        holidays,
        reassignment_index: overlay.to_map(),
    })
}

/// Collects the work occurrences needing a driver during the week.
fn build_replacement_pool(
    snapshot: &Snapshot,
    week_dates: &[NaiveDate],
    holiday_dates: &HashSet<NaiveDate>,
    overlay: &OverlayIndex,
    names: &HashMap<&str, &str>,
    tasks_excluded: &HashMap<(&str, NaiveDate), bool>,
) -> ReplacementPool {
    let mut pool = ReplacementPool {
        unassigned_assignments: snapshot
            .assignments
            .iter()
            .filter(|a| a.employee_id.is_none())
            .cloned()
            .collect(),
        unassigned_tasks: snapshot
            .temporary_tasks
            .iter()
            .filter(|t| t.employee_id.is_none())
            .cloned()
            .collect(),
        absent_items: Vec::new(),
    };

    let display_name = |employee_id: Option<&str>, fallback: &str| -> String {
        employee_id
            .and_then(|id| names.get(id).copied())
            .unwrap_or(fallback)
            .to_string()
    };

    for &date in week_dates {
        // Nothing runs on a holiday, so nothing needs covering.
        if holiday_dates.contains(&date) {
            continue;
        }
        let Some(letter) = weekday_letter(date) else {
            continue;
        };

        for assignment in snapshot.assignments.iter().filter(|a| a.covers_date(date)) {
            for shift in &assignment.shifts {
                if shift.is_admin {
                    let vacancy = match overlay.effective_shift_employee(date, assignment, &shift.id)
                    {
                        None => overlay
                            .lookup_shift(date, &assignment.id, &shift.id)
                            .map(|o| display_name(o.original_employee_id.as_deref(),
                                                  &assignment.employee_name)),
                        Some(e) if absent_for(&snapshot.absences, e, date, &shift.name) => {
                            Some(display_name(Some(e), &assignment.employee_name))
                        }
                        Some(_) => None,
                    };
                    if let Some(original_employee) = vacancy {
                        pool.absent_items.push(ReplacementItem::Assignment {
                            data: assignment.clone(),
                            date,
                            original_employee,
                            shift_id: Some(shift.id.clone()),
                            block_id: None,
                        });
                    }
                    continue;
                }

                for block in shift.blocks.iter().filter(|b| b.applies_on(letter)) {
                    let vacancy = match overlay
                        .effective_block_employee(date, assignment, &shift.id, &block.id)
                    {
                        // Baseline-unassigned occurrences already sit in
                        // unassigned_assignments; only an override to nobody
                        // vacates one here.
                        None => overlay
                            .lookup_block(date, &assignment.id, &shift.id, &block.id)
                            .map(|o| display_name(o.original_employee_id.as_deref(),
                                                  &assignment.employee_name)),
                        Some(e) if absent_for(&snapshot.absences, e, date, &shift.name) => {
                            Some(display_name(Some(e), &assignment.employee_name))
                        }
                        Some(_) => None,
                    };
                    if let Some(original_employee) = vacancy {
                        pool.absent_items.push(ReplacementItem::Assignment {
                            data: assignment.clone(),
                            date,
                            original_employee,
                            shift_id: Some(shift.id.clone()),
                            block_id: Some(block.id.clone()),
                        });
                    }
                }
            }
        }
    }

    for task in &snapshot.temporary_tasks {
        let Some(employee_id) = task.employee_id.as_deref() else {
            continue;
        };
        if !week_dates.contains(&task.date) || holiday_dates.contains(&task.date) {
            continue;
        }
        if tasks_excluded
            .get(&(employee_id, task.date))
            .copied()
            .unwrap_or(false)
        {
            pool.absent_items.push(ReplacementItem::TemporaryTask {
                data: task.clone(),
                date: task.date,
                original_employee: display_name(Some(employee_id), &task.employee_name),
            });
        }
    }

    pool
}
