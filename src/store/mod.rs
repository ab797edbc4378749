//! Repository seam between the engine and whatever persists the records.
//!
//! The engine never talks to a database: it computes over a [`Snapshot`] of
//! the collections, fetched through the [`ScheduleStore`] trait at request
//! start. Implementations over a real store surface fetch failures as
//! [`EngineError::Store`](crate::error::EngineError::Store);
//! [`InMemoryStore`] backs tests and embedded use, and carries the keyed
//! upsert/delete that is the overlay's only mutation path.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    Absence, Assignment, Employee, Holiday, TemporaryReassignment, TemporaryTask,
};

/// The collections one computation runs over.
///
/// Plain owned data: cloning the records out of the store makes each
/// computation independent of concurrent writes, and `Snapshot` is
/// `Send + Sync` so per-employee work may run in parallel.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// All employees on file.
    pub employees: Vec<Employee>,
    /// All assignments on file.
    pub assignments: Vec<Assignment>,
    /// All temporary tasks on file.
    pub temporary_tasks: Vec<TemporaryTask>,
    /// All absences on file.
    pub absences: Vec<Absence>,
    /// All holidays on file.
    pub holidays: Vec<Holiday>,
    /// Reassignments for the requested dates.
    pub reassignments: Vec<TemporaryReassignment>,
}

/// Read access to the scheduling collections.
///
/// The datasets are small enough to filter in memory, so every accessor
/// returns the whole collection — except reassignments, which implementations
/// may filter by date at the boundary.
pub trait ScheduleStore {
    /// Fetches all employees.
    fn employees(&self) -> EngineResult<Vec<Employee>>;
    /// Fetches all assignments.
    fn assignments(&self) -> EngineResult<Vec<Assignment>>;
    /// Fetches all temporary tasks.
    fn temporary_tasks(&self) -> EngineResult<Vec<TemporaryTask>>;
    /// Fetches all absences.
    fn absences(&self) -> EngineResult<Vec<Absence>>;
    /// Fetches all holidays.
    fn holidays(&self) -> EngineResult<Vec<Holiday>>;
    /// Fetches the reassignments applying to any of the given dates.
    fn reassignments_for_dates(
        &self,
        dates: &[NaiveDate],
    ) -> EngineResult<Vec<TemporaryReassignment>>;

    /// Fetches everything one computation needs, in one place.
    fn snapshot(&self, dates: &[NaiveDate]) -> EngineResult<Snapshot> {
        Ok(Snapshot {
            employees: self.employees()?,
            assignments: self.assignments()?,
            temporary_tasks: self.temporary_tasks()?,
            absences: self.absences()?,
            holidays: self.holidays()?,
            reassignments: self.reassignments_for_dates(dates)?,
        })
    }
}

/// An in-memory store over plain `Vec`s.
///
/// # Example
///
/// ```
/// use roster_engine::models::Employee;
/// use roster_engine::store::{InMemoryStore, ScheduleStore};
///
/// let mut store = InMemoryStore::new();
/// store.add_employee(Employee::new("HARVEY, Claude"));
/// assert_eq!(store.employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    assignments: Vec<Assignment>,
    temporary_tasks: Vec<TemporaryTask>,
    absences: Vec<Absence>,
    holidays: Vec<Holiday>,
    reassignments: Vec<TemporaryReassignment>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee record.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Adds an assignment record.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a temporary task record.
    pub fn add_temporary_task(&mut self, task: TemporaryTask) {
        self.temporary_tasks.push(task);
    }

    /// Adds an absence record.
    pub fn add_absence(&mut self, absence: Absence) {
        self.absences.push(absence);
    }

    /// Adds a holiday record.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.holidays.push(holiday);
    }

    /// Inserts a reassignment, superseding any prior override for the same
    /// occurrence key (last write wins).
    pub fn upsert_reassignment(&mut self, reassignment: TemporaryReassignment) {
        let key = reassignment.key();
        self.reassignments.retain(|r| r.key() != key);
        self.reassignments.push(reassignment);
    }

    /// Deletes a reassignment by id. Returns true if a record was removed.
    pub fn delete_reassignment(&mut self, id: &str) -> bool {
        let before = self.reassignments.len();
        self.reassignments.retain(|r| r.id != id);
        self.reassignments.len() != before
    }

    /// Deletes every reassignment for a date, e.g. when a day's board is
    /// reset. Returns the number of records removed.
    pub fn delete_reassignments_for_date(&mut self, date: NaiveDate) -> usize {
        let before = self.reassignments.len();
        self.reassignments.retain(|r| r.date != date);
        before - self.reassignments.len()
    }
}

impl ScheduleStore for InMemoryStore {
    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn assignments(&self) -> EngineResult<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    fn temporary_tasks(&self) -> EngineResult<Vec<TemporaryTask>> {
        Ok(self.temporary_tasks.clone())
    }

    fn absences(&self) -> EngineResult<Vec<Absence>> {
        Ok(self.absences.clone())
    }

    fn holidays(&self) -> EngineResult<Vec<Holiday>> {
        Ok(self.holidays.clone())
    }

    fn reassignments_for_dates(
        &self,
        dates: &[NaiveDate],
    ) -> EngineResult<Vec<TemporaryReassignment>> {
        Ok(self
            .reassignments
            .iter()
            .filter(|r| dates.contains(&r.date))
            .cloned()
            .collect())
    }
}
