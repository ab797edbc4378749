//! Error types for the schedule computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule computation.

use thiserror::Error;

/// The main error type for the schedule computation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::TimeParse {
///     value: "7h30".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time string '7h30': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time string could not be parsed as `HH:MM`.
    #[error("Invalid time string '{value}': expected HH:MM")]
    TimeParse {
        /// The string that failed to parse.
        value: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A repository implementation failed to fetch a collection.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
