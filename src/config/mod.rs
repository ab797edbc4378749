//! Engine settings loading and management.
//!
//! This module provides the tunable parameters of the computation engine and
//! a loader for reading them from a YAML file. Every parameter has a default
//! matching the production deployment, so callers without a settings file can
//! use [`Settings::default`].
//!
//! # Example
//!
//! ```
//! use roster_engine::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.conflict_tolerance_minutes, 5);
//! assert_eq!(settings.admin_daily_minutes, 480);
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::Settings;
