//! Settings types for the schedule computation engine.
//!
//! This module contains the strongly-typed settings structure deserialized
//! from a YAML settings file.

use serde::{Deserialize, Serialize};

fn default_conflict_tolerance() -> i32 {
    5
}

fn default_admin_daily_minutes() -> i32 {
    480
}

/// Tunable parameters of the computation engine.
///
/// Each field carries a serde default, so a partial YAML file only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Overlap minutes tolerated before a conflict is reported.
    #[serde(default = "default_conflict_tolerance")]
    pub conflict_tolerance_minutes: i32,
    /// Fixed daily minutes contributed by an admin shift.
    #[serde(default = "default_admin_daily_minutes")]
    pub admin_daily_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            conflict_tolerance_minutes: default_conflict_tolerance(),
            admin_daily_minutes: default_admin_daily_minutes(),
        }
    }
}
