//! Core data models for the schedule computation engine.
//!
//! This module contains all the domain records used throughout the engine.
//! Records mirror what the CRUD collaborators persist; unknown fields in
//! incoming JSON are ignored and optional fields carry serde defaults so
//! legacy documents keep deserializing.

mod absence;
mod assignment;
mod conflict;
mod employee;
mod holiday;
mod reassignment;
mod temporary_task;
mod week_schedule;

pub use absence::Absence;
pub use assignment::{Assignment, Block, Shift};
pub use conflict::{Conflict, ConflictReport};
pub use employee::Employee;
pub use holiday::{Holiday, HolidayKind};
pub use reassignment::{TemporaryReassignment, occurrence_key};
pub use temporary_task::TemporaryTask;
pub use week_schedule::{EmployeeSchedule, ReplacementItem, ReplacementPool, WeekSchedule};
