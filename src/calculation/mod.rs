//! Calculation logic for the schedule computation engine.
//!
//! This module contains all the computation functions: minute-of-day
//! arithmetic, interval merging, the per-day commitment resolver, the
//! conflict detector, the reassignment overlay index, the week aggregator,
//! and the legacy per-shift summing formula retained for parity with
//! archived hour reports.

mod conflict;
mod day_resolver;
mod interval_merge;
mod legacy;
mod overlay;
mod time_arith;
mod week_aggregator;

pub use conflict::check_conflict;
pub use day_resolver::{DayResolution, resolve_day, weekday_letter};
pub use interval_merge::{Interval, merge_intervals, total_minutes};
pub use legacy::{legacy_daily_minutes, legacy_shift_minutes};
pub use overlay::OverlayIndex;
pub use time_arith::{format_duration, to_minutes, to_minutes_lenient, to_time_string};
pub use week_aggregator::{
    business_week, compute_week_schedule, current_week_start, week_start_monday,
};
