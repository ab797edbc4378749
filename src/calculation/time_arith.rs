//! Minute-of-day arithmetic.
//!
//! Clock times travel as `HH:MM` strings on the records and are converted to
//! minutes since midnight at this boundary. Formatting performs no wraparound
//! validation: out-of-range minute values print as-is, matching the rest of
//! the engine's policy of propagating rather than validating.

use crate::error::{EngineError, EngineResult};

/// Parses an `HH:MM` string to minutes since midnight.
///
/// Fails on malformed input, including the empty string. Use
/// [`to_minutes_lenient`] where an absent value should read as midnight.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::to_minutes;
///
/// assert_eq!(to_minutes("07:30").unwrap(), 450);
/// assert_eq!(to_minutes("00:00").unwrap(), 0);
/// assert!(to_minutes("").is_err());
/// assert!(to_minutes("7h30").is_err());
/// ```
pub fn to_minutes(value: &str) -> EngineResult<i32> {
    let (hours, minutes) = value.split_once(':').ok_or_else(|| EngineError::TimeParse {
        value: value.to_string(),
    })?;

    let hours: i32 = hours.trim().parse().map_err(|_| EngineError::TimeParse {
        value: value.to_string(),
    })?;
    let minutes: i32 = minutes.trim().parse().map_err(|_| EngineError::TimeParse {
        value: value.to_string(),
    })?;

    Ok(hours * 60 + minutes)
}

/// Parses an `HH:MM` string to minutes, treating the empty string as 0.
///
/// This is the intentional leniency for optional time fields on incoming
/// records; non-empty malformed input still fails.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::to_minutes_lenient;
///
/// assert_eq!(to_minutes_lenient("").unwrap(), 0);
/// assert_eq!(to_minutes_lenient("08:15").unwrap(), 495);
/// assert!(to_minutes_lenient("noon").is_err());
/// ```
pub fn to_minutes_lenient(value: &str) -> EngineResult<i32> {
    if value.is_empty() {
        return Ok(0);
    }
    to_minutes(value)
}

/// Formats minutes since midnight as zero-padded 24h `HH:MM`.
///
/// No wraparound validation: 1500 minutes formats as `"25:00"`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::to_time_string;
///
/// assert_eq!(to_time_string(450), "07:30");
/// assert_eq!(to_time_string(1500), "25:00");
/// ```
pub fn to_time_string(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a duration in minutes as `HH:MM` via integer division, no
/// rounding.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(60), "01:00");
/// assert_eq!(format_duration(2189), "36:29");
/// ```
pub fn format_duration(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
