//! Employee store
//!
//! The single source of truth for the employee list. Records are mutated only
//! through [`EmployeeStore::create_employee`] and
//! [`EmployeeStore::update_employee`] (or the equivalent
//! [`EmployeeAction`]s passed to [`EmployeeStore::dispatch`]); the list itself
//! is only ever handed out read-only.
//!
//! New ids come from an injected [`IdSource`]. The default
//! [`CounterIdSource`] never hands out an id at or below the largest id
//! already in the store.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::employee::{Employee, EmployeeId};
use crate::error::{OrgChartError, Result};
use crate::validation::ValidatedValues;

/// Store handle shared between the app loop and any open form
pub type SharedStore = Arc<Mutex<EmployeeStore>>;

/// Lock a shared store, turning mutex poisoning into a state error
pub fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, EmployeeStore>> {
    store
        .lock()
        .map_err(|e| OrgChartError::state(format!("Store mutex poisoned: {}", e)))
}

/// Source of identifiers for newly created records
pub trait IdSource: Send {
    /// Produce an id for a new record given the records that already exist,
    /// or `None` when no unused id is left
    fn next_id(&mut self, existing: &[Employee]) -> Option<EmployeeId>;
}

/// Incrementing counter, always ahead of the largest existing id
#[derive(Debug, Clone)]
pub struct CounterIdSource {
    // None once u64::MAX has been handed out
    next: Option<EmployeeId>,
}

impl CounterIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: EmployeeId) -> Self {
        Self { next: Some(next) }
    }
}

impl Default for CounterIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for CounterIdSource {
    fn next_id(&mut self, existing: &[Employee]) -> Option<EmployeeId> {
        let mut floor = 1;
        for employee in existing {
            floor = floor.max(employee.id.checked_add(1)?);
        }
        let id = self.next?.max(floor);
        self.next = id.checked_add(1);
        Some(id)
    }
}

/// Mutations the form issues against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeAction {
    /// Append a new record
    Add(Employee),
    /// Replace name, description and parent of the record with the same id
    Update(Employee),
}

/// Ordered list of employees plus the id source for new records
pub struct EmployeeStore {
    employees: Vec<Employee>,
    ids: Box<dyn IdSource>,
}

impl std::fmt::Debug for EmployeeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("employees", &self.employees)
            .finish_non_exhaustive()
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Create an empty store with a counter id source
    pub fn new() -> Self {
        Self::with_id_source(Vec::new(), CounterIdSource::new())
    }

    /// Create a store seeded with existing records
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self::with_id_source(employees, CounterIdSource::new())
    }

    /// Create a store with a custom id source
    pub fn with_id_source(employees: Vec<Employee>, ids: impl IdSource + 'static) -> Self {
        Self {
            employees,
            ids: Box::new(ids),
        }
    }

    /// Wrap the store in a shareable handle
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// All records, in insertion order
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Find the record with `id`
    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Allocate an id for a record about to be created.
    ///
    /// Fails with a state error when the id source has run out, rather than
    /// reusing an id that is already taken.
    pub fn next_id(&mut self) -> Result<EmployeeId> {
        self.ids
            .next_id(&self.employees)
            .ok_or_else(|| OrgChartError::state("No unused employee id left"))
    }

    /// Append a new record. Id collisions are not checked.
    pub fn create_employee(&mut self, record: Employee) {
        info!(id = record.id, name = %record.name, "Creating employee");
        self.employees.push(record);
    }

    /// Replace the fields of the record with `id`.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update_employee(&mut self, id: EmployeeId, fields: ValidatedValues) -> bool {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                info!(id, name = %fields.name, "Updating employee");
                employee.name = fields.name;
                employee.description = fields.description;
                employee.parent_id = fields.parent_id;
                true
            }
            None => {
                debug!(id, "Update ignored, no employee with this id");
                false
            }
        }
    }

    /// Apply an action. Returns whether the store changed.
    pub fn dispatch(&mut self, action: EmployeeAction) -> bool {
        match action {
            EmployeeAction::Add(record) => {
                self.create_employee(record);
                true
            }
            EmployeeAction::Update(record) => self.update_employee(
                record.id,
                ValidatedValues {
                    name: record.name,
                    description: record.description,
                    parent_id: record.parent_id,
                },
            ),
        }
    }
}
