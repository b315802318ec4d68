//! Position form controller
//!
//! Holds the transient edit state for a single create-or-update of an
//! [`Employee`]. The form is bound to a [`SharedStore`] at construction and
//! talks to it in exactly two places: reading the employee list (initial
//! values, parent options) and issuing one [`EmployeeAction`] on a successful
//! submit.
//!
//! # Lifecycle
//!
//! ```text
//! new(store, employee_id, on_close)
//!   -> reset(initial values)          // record fields, or ("", "", None)
//!   -> set_* / insert_char / ...       // local edits only
//!   -> submit()
//!        invalid: errors attached, nothing dispatched, on_close not called
//!        valid:   one Add/Update dispatched, on_close called once, edits discarded
//! ```
//!
//! Field values are only re-populated from the store through an explicit
//! [`EmployeeForm::reset`], [`EmployeeForm::reload`] or
//! [`EmployeeForm::set_employee_id`]. Changes other code makes to the store
//! while the form is open never overwrite what the user has typed.

use tracing::{debug, info};

use crate::employee::{Employee, EmployeeId};
use crate::error::{OrgChartError, Result};
use crate::store::{lock_store, EmployeeAction, EmployeeStore, SharedStore};
use crate::validation::{validate, Field, FieldErrors, FormValues};

/// Label of the parent option that maps to "no parent"
pub const NO_PARENT_LABEL: &str = "No Parent";

/// One entry of the parent selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOption {
    pub label: String,
    pub value: Option<EmployeeId>,
}

/// Parent selector entries: "No Parent" first, then one per employee in
/// store order, labeled with the employee's name.
pub fn parent_options(employees: &[Employee]) -> Vec<ParentOption> {
    let mut options = Vec::with_capacity(employees.len() + 1);
    options.push(ParentOption {
        label: NO_PARENT_LABEL.to_string(),
        value: None,
    });
    options.extend(employees.iter().map(|e| ParentOption {
        label: e.name.clone(),
        value: Some(e.id),
    }));
    options
}

/// Initial field values for `employee_id`: the matching record's fields, or
/// empty values when there is no id or no match.
pub fn initial_values(store: &EmployeeStore, employee_id: Option<EmployeeId>) -> FormValues {
    employee_id
        .and_then(|id| store.find(id))
        .map(|e| FormValues::new(e.name.clone(), e.description.clone(), e.parent_id))
        .unwrap_or_default()
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended
    Created(Employee),
    /// An update was dispatched; `applied` is false when no record matched
    Updated { id: EmployeeId, applied: bool },
    /// Validation failed; nothing was dispatched
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// Form controller for creating or updating one position
pub struct EmployeeForm {
    store: SharedStore,
    employee_id: Option<EmployeeId>,
    values: FormValues,
    errors: FieldErrors,
    focus: Field,
    on_close: Box<dyn FnMut()>,
}

impl std::fmt::Debug for EmployeeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeForm")
            .field("employee_id", &self.employee_id)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl EmployeeForm {
    /// Create a form bound to `store`.
    ///
    /// With `employee_id` the form edits that record; without it the form
    /// creates a new one. `on_close` runs once after every successful submit.
    pub fn new(
        store: SharedStore,
        employee_id: Option<EmployeeId>,
        on_close: impl FnMut() + 'static,
    ) -> Result<Self> {
        let values = initial_values(&*lock_store(&store)?, employee_id);
        debug!(?employee_id, "Opening position form");

        let mut form = Self {
            store,
            employee_id,
            values: FormValues::default(),
            errors: FieldErrors::new(),
            focus: Field::Name,
            on_close: Box::new(on_close),
        };
        form.reset(values);
        Ok(form)
    }

    /// Replace all field values and clear errors
    pub fn reset(&mut self, values: FormValues) {
        self.values = values;
        self.errors = FieldErrors::new();
        self.focus = Field::Name;
    }

    /// Re-populate the fields from the store for the current employee id,
    /// discarding any edits
    pub fn reload(&mut self) -> Result<()> {
        let values = initial_values(&*lock_store(&self.store)?, self.employee_id);
        self.reset(values);
        Ok(())
    }

    /// Switch the record being edited. Fields are reset only when the id
    /// actually changes.
    pub fn set_employee_id(&mut self, employee_id: Option<EmployeeId>) -> Result<()> {
        if self.employee_id == employee_id {
            return Ok(());
        }
        self.employee_id = employee_id;
        self.reload()
    }

    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.employee_id
    }

    /// Whether submit will update an existing record
    pub fn is_edit(&self) -> bool {
        self.employee_id.is_some()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message shown under `field`, if any
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Position" } else { "New Position" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Update Position" } else { "Add Position" }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        self.errors.clear(Field::Name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
        self.errors.clear(Field::Description);
    }

    pub fn set_parent_id(&mut self, parent_id: Option<EmployeeId>) {
        self.values.parent_id = parent_id;
        self.errors.clear(Field::ParentId);
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::Name => {
                self.values.name.push(c);
                self.errors.clear(Field::Name);
            }
            Field::Description => {
                self.values.description.push(c);
                self.errors.clear(Field::Description);
            }
            Field::ParentId => {}
        }
    }

    /// Remove the last character of the focused text field
    pub fn delete_char(&mut self) {
        match self.focus {
            Field::Name => {
                self.values.name.pop();
                self.errors.clear(Field::Name);
            }
            Field::Description => {
                self.values.description.pop();
                self.errors.clear(Field::Description);
            }
            Field::ParentId => {}
        }
    }

    /// Current parent selector entries
    pub fn parent_options(&self) -> Result<Vec<ParentOption>> {
        Ok(parent_options(lock_store(&self.store)?.list_employees()))
    }

    /// Index of the option matching the current parent, if it is listed
    pub fn selected_parent_index(&self) -> Result<Option<usize>> {
        let options = self.parent_options()?;
        Ok(options.iter().position(|o| o.value == self.values.parent_id))
    }

    /// Pick the parent by its index in [`EmployeeForm::parent_options`]
    pub fn select_parent_option(&mut self, index: usize) -> Result<()> {
        let options = self.parent_options()?;
        let option = options.get(index).ok_or_else(|| {
            OrgChartError::general(format!(
                "No parent option at index {} ({} available)",
                index,
                options.len()
            ))
        })?;
        self.set_parent_id(option.value);
        Ok(())
    }

    /// Step the parent selection forward or backward, wrapping around
    pub fn cycle_parent(&mut self, forward: bool) -> Result<()> {
        let options = self.parent_options()?;
        let count = options.len();
        let current = options
            .iter()
            .position(|o| o.value == self.values.parent_id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.set_parent_id(options[next].value);
        Ok(())
    }

    /// Validate and, when valid, dispatch one create or update action.
    ///
    /// Validation failures are returned as [`SubmitOutcome::Rejected`] and
    /// also kept on the form for display. `Err` is reserved for store access
    /// failures and for running out of ids; neither dispatches nor closes.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let validated = match validate(&self.values) {
            Ok(validated) => validated,
            Err(errors) => {
                debug!(%errors, "Position form rejected");
                self.errors = errors.clone();
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let outcome = {
            let mut store = lock_store(&self.store)?;
            match self.employee_id {
                Some(id) => {
                    let record = Employee::new(
                        id,
                        validated.name,
                        validated.description,
                        validated.parent_id,
                    );
                    let applied = store.dispatch(EmployeeAction::Update(record));
                    SubmitOutcome::Updated { id, applied }
                }
                None => {
                    let id = store.next_id()?;
                    let record = Employee::new(
                        id,
                        validated.name,
                        validated.description,
                        validated.parent_id,
                    );
                    store.dispatch(EmployeeAction::Add(record.clone()));
                    SubmitOutcome::Created(record)
                }
            }
        };

        info!(?outcome, "Position form submitted");
        self.reset(FormValues::default());
        (self.on_close)();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store() -> SharedStore {
        EmployeeStore::from_employees(vec![
            Employee::new(1, "CEO", "Top", None),
            Employee::new(5, "CTO", "Engineering", Some(1)),
        ])
        .into_shared()
    }

    fn counting_form(
        store: SharedStore,
        employee_id: Option<EmployeeId>,
    ) -> (EmployeeForm, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closes);
        let form = EmployeeForm::new(store, employee_id, move || counter.set(counter.get() + 1))
            .unwrap();
        (form, closes)
    }

    #[test]
    fn test_initial_values_from_record() {
        let (form, _) = counting_form(store(), Some(5));
        assert_eq!(form.values(), &FormValues::new("CTO", "Engineering", Some(1)));
        assert_eq!(form.submit_label(), "Update Position");
    }

    #[test]
    fn test_initial_values_without_id_are_empty() {
        let (form, _) = counting_form(store(), None);
        assert_eq!(form.values(), &FormValues::new("", "", None));
        assert_eq!(form.submit_label(), "Add Position");
    }

    #[test]
    fn test_unmatched_id_starts_empty() {
        let (form, _) = counting_form(store(), Some(404));
        assert_eq!(form.values(), &FormValues::default());
    }

    #[test]
    fn test_rejected_submit_keeps_errors_and_skips_close() {
        let shared = store();
        let (mut form, closes) = counting_form(shared.clone(), None);
        form.set_description("Finance");

        let outcome = form.submit().unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(form.error(Field::Name), Some("Name is required"));
        assert_eq!(form.error(Field::Description), None);
        assert_eq!(closes.get(), 0);
        assert_eq!(lock_store(&shared).unwrap().len(), 2);
    }

    #[test]
    fn test_editing_clears_field_error() {
        let (mut form, _) = counting_form(store(), None);
        form.submit().unwrap();
        assert!(form.error(Field::Name).is_some());
        form.insert_char('C');
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Description).is_some());
    }

    #[test]
    fn test_store_changes_do_not_overwrite_edits() {
        let shared = store();
        let (mut form, _) = counting_form(shared.clone(), Some(5));
        form.set_name("Chief Technology Officer");

        lock_store(&shared).unwrap().dispatch(EmployeeAction::Update(Employee::new(
            5,
            "Renamed elsewhere",
            "Engineering",
            Some(1),
        )));
        assert_eq!(form.values().name, "Chief Technology Officer");

        form.reload().unwrap();
        assert_eq!(form.values().name, "Renamed elsewhere");
    }

    #[test]
    fn test_set_same_employee_id_keeps_edits() {
        let (mut form, _) = counting_form(store(), Some(5));
        form.set_name("Draft");
        form.set_employee_id(Some(5)).unwrap();
        assert_eq!(form.values().name, "Draft");
        form.set_employee_id(Some(1)).unwrap();
        assert_eq!(form.values().name, "CEO");
    }

    #[test]
    fn test_parent_cycle_wraps_through_no_parent() {
        let (mut form, _) = counting_form(store(), None);
        form.cycle_parent(true).unwrap();
        assert_eq!(form.values().parent_id, Some(1));
        form.cycle_parent(true).unwrap();
        assert_eq!(form.values().parent_id, Some(5));
        form.cycle_parent(true).unwrap();
        assert_eq!(form.values().parent_id, None);
        form.cycle_parent(false).unwrap();
        assert_eq!(form.values().parent_id, Some(5));
    }

    #[test]
    fn test_select_parent_option_out_of_range() {
        let (mut form, _) = counting_form(store(), None);
        assert!(form.select_parent_option(3).is_err());
        form.select_parent_option(2).unwrap();
        assert_eq!(form.values().parent_id, Some(5));
        assert_eq!(form.selected_parent_index().unwrap(), Some(2));
    }
}
