//! Employee model.
//!
//! This module defines the Employee struct representing a driver in the
//! scheduling system. The employee name is denormalized onto other records
//! (assignments, tasks, absences) at creation time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a driver employed by the bus operation.
///
/// # Example
///
/// ```
/// use roster_engine::models::Employee;
///
/// let employee = Employee::new("HARVEY, Claude");
/// assert_eq!(employee.name, "HARVEY, Claude");
/// assert!(!employee.is_inactive);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, conventionally "LASTNAME, Firstname".
    pub name: String,
    /// The date the employee was hired, when known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Vehicle (berline) number operated by this driver.
    #[serde(default)]
    pub berline: String,
    /// Inactive employees stay on file but no longer drive.
    #[serde(default)]
    pub is_inactive: bool,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Creates a new employee with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            hire_date: None,
            phone: String::new(),
            email: String::new(),
            berline: String::new(),
            is_inactive: false,
            created_at: Utc::now(),
        }
    }
}
