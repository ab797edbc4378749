//! Interval merging.
//!
//! Collapses an unordered collection of minute-of-day windows into the
//! minimal set of disjoint, ordered windows. This is what prevents an HLP
//! buffer from being double-counted against an overlapping block or task:
//! every minute of the day is counted at most once, no matter how many
//! commitments cover it.

use serde::{Deserialize, Serialize};

/// A half-open-feeling but inclusive-in-practice minute window `[start, end]`.
///
/// Durations are computed as `end - start`; two windows that merely touch
/// (`a.end == b.start`) merge into one, so the shared boundary minute is
/// never counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Start minute of the window.
    pub start: i32,
    /// End minute of the window.
    pub end: i32,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The window's duration in minutes.
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }
}

/// Merges overlapping and touching intervals into minimal disjoint form.
///
/// Sorts ascending by start, then sweeps once: the accumulator absorbs the
/// next interval whenever `next.start <= acc.end` (touching counts), and its
/// end only ever grows (`max`), so an interval nested inside the accumulator
/// cannot shrink it. O(n log n) in the sort.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::{Interval, merge_intervals, total_minutes};
///
/// let merged = merge_intervals(vec![
///     Interval::new(590, 650),
///     Interval::new(540, 600),
/// ]);
/// assert_eq!(merged, vec![Interval::new(540, 650)]);
/// assert_eq!(total_minutes(&merged), 110); // not 120
/// ```
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged = Vec::with_capacity(intervals.len());
    let mut acc = intervals[0];
    for next in intervals.into_iter().skip(1) {
        if next.start <= acc.end {
            acc.end = acc.end.max(next.end);
        } else {
            merged.push(acc);
            acc = next;
        }
    }
    merged.push(acc);
    merged
}

/// Sums the durations of a set of intervals.
pub fn total_minutes(intervals: &[Interval]) -> i32 {
    intervals.iter().map(Interval::duration).sum()
}
