//! Conflict report models.
//!
//! These records are the output of the conflict detector: a boolean verdict
//! plus the full list of offending commitments, each naming the record it
//! collides with and the overlap amount in minutes.

use serde::{Deserialize, Serialize};

/// One scheduling conflict against an existing commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Conflict {
    /// The candidate interval collides with an assignment block (buffers
    /// included).
    Assignment {
        /// The offending assignment.
        assignment_id: String,
        /// Circuit number of the offending assignment.
        circuit: String,
        /// Name of the shift holding the block.
        shift: String,
        /// The block's unbuffered window, `"HH:MM-HH:MM"`.
        block_time: String,
        /// Overlap beyond the tolerance, in minutes.
        overlap_minutes: i32,
    },
    /// The candidate interval collides with a same-date temporary task.
    TemporaryTask {
        /// The offending task.
        task_id: String,
        /// Name of the offending task.
        task_name: String,
        /// The task's window, `"HH:MM-HH:MM"`.
        task_time: String,
        /// Overlap in minutes.
        overlap_minutes: i32,
    },
}

impl Conflict {
    /// The overlap amount in minutes, regardless of conflict type.
    pub fn overlap_minutes(&self) -> i32 {
        match self {
            Conflict::Assignment {
                overlap_minutes, ..
            } => *overlap_minutes,
            Conflict::TemporaryTask {
                overlap_minutes, ..
            } => *overlap_minutes,
        }
    }
}

/// The full result of a conflict check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// True when at least one conflict was found.
    pub conflict: bool,
    /// Every conflicting commitment, in scan order.
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Builds a report from a conflict list, deriving the boolean.
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        Self {
            conflict: !conflicts.is_empty(),
            conflicts,
        }
    }
}
