//! Reassignment overlay index.
//!
//! Built once per computation request, the [`OverlayIndex`] resolves the
//! *effective* employee of every shift/block occurrence: the baseline
//! assignment's employee unless a [`TemporaryReassignment`] redirects that
//! occurrence for that date. The baseline record is never touched; deleting
//! the override restores it exactly.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Assignment, TemporaryReassignment, occurrence_key};

/// Per-date override lookup keyed by occurrence.
///
/// A new override for an already-keyed tuple supersedes the prior one:
/// entries are applied in `created_at` order, so the latest write wins.
#[derive(Debug, Clone, Default)]
pub struct OverlayIndex {
    entries: HashMap<String, TemporaryReassignment>,
}

impl OverlayIndex {
    /// Builds the index from a reassignment snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roster_engine::calculation::OverlayIndex;
    /// use roster_engine::models::TemporaryReassignment;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
    /// let reassignment = TemporaryReassignment::new(
    ///     date, "ass-1", "shf-1", Some("blk-1".into()), Some("emp-e".into()), None,
    /// );
    /// let index = OverlayIndex::build(&[reassignment]);
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn build(reassignments: &[TemporaryReassignment]) -> Self {
        let mut ordered: Vec<&TemporaryReassignment> = reassignments.iter().collect();
        ordered.sort_by_key(|r| r.created_at);

        let mut entries = HashMap::with_capacity(ordered.len());
        for reassignment in ordered {
            entries.insert(reassignment.key(), reassignment.clone());
        }
        Self { entries }
    }

    /// Number of indexed overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no override is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the override for a shift-level occurrence.
    pub fn lookup_shift(
        &self,
        date: NaiveDate,
        assignment_id: &str,
        shift_id: &str,
    ) -> Option<&TemporaryReassignment> {
        self.entries
            .get(&occurrence_key(date, assignment_id, shift_id, None))
    }

    /// Looks up the override for a block occurrence.
    ///
    /// A block-scoped override wins; otherwise a shift-scoped override for
    /// the owning shift redirects all of its blocks.
    pub fn lookup_block(
        &self,
        date: NaiveDate,
        assignment_id: &str,
        shift_id: &str,
        block_id: &str,
    ) -> Option<&TemporaryReassignment> {
        self.entries
            .get(&occurrence_key(date, assignment_id, shift_id, Some(block_id)))
            .or_else(|| self.lookup_shift(date, assignment_id, shift_id))
    }

    /// The effective employee of a shift-level occurrence on a date.
    ///
    /// Returns the override's `new_employee_id` when one applies (which may
    /// be `None`, leaving the occurrence unassigned), else the assignment's
    /// own employee.
    pub fn effective_shift_employee<'a>(
        &'a self,
        date: NaiveDate,
        assignment: &'a Assignment,
        shift_id: &str,
    ) -> Option<&'a str> {
        match self.lookup_shift(date, &assignment.id, shift_id) {
            Some(overlay) => overlay.new_employee_id.as_deref(),
            None => assignment.employee_id.as_deref(),
        }
    }

    /// The effective employee of a block occurrence on a date.
    pub fn effective_block_employee<'a>(
        &'a self,
        date: NaiveDate,
        assignment: &'a Assignment,
        shift_id: &str,
        block_id: &str,
    ) -> Option<&'a str> {
        match self.lookup_block(date, &assignment.id, shift_id, block_id) {
            Some(overlay) => overlay.new_employee_id.as_deref(),
            None => assignment.employee_id.as_deref(),
        }
    }

    /// Clones the index into the key→override map exposed to collaborators.
    pub fn to_map(&self) -> HashMap<String, TemporaryReassignment> {
        self.entries.clone()
    }
}
