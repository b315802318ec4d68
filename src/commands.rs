//! Headless commands
//!
//! Non-interactive counterparts of the TUI actions. `add` and `update` go
//! through the same [`EmployeeForm`] the TUI uses, so validation and dispatch
//! behave identically.

use crate::employee::{Employee, EmployeeId};
use crate::error::Result;
use crate::form::{EmployeeForm, SubmitOutcome};
use crate::store::SharedStore;
use crate::store_file::{dangling_parents, duplicate_ids};
use crate::ui::parent_column;

/// How an update should treat the parent field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentChange {
    Keep,
    Set(EmployeeId),
    Clear,
}

impl ParentChange {
    /// Build from the `--parent` / `--no-parent` flag pair
    pub fn from_flags(parent: Option<EmployeeId>, no_parent: bool) -> Self {
        match (parent, no_parent) {
            (Some(id), _) => ParentChange::Set(id),
            (None, true) => ParentChange::Clear,
            (None, false) => ParentChange::Keep,
        }
    }
}

/// Submit a create through the form
pub fn add_employee(
    store: &SharedStore,
    name: &str,
    description: &str,
    parent: Option<EmployeeId>,
) -> Result<SubmitOutcome> {
    let mut form = EmployeeForm::new(store.clone(), None, || {})?;
    form.set_name(name);
    form.set_description(description);
    form.set_parent_id(parent);
    form.submit()
}

/// Submit an update through the form, starting from the record's current values
pub fn update_employee(
    store: &SharedStore,
    id: EmployeeId,
    name: Option<&str>,
    description: Option<&str>,
    parent: ParentChange,
) -> Result<SubmitOutcome> {
    let mut form = EmployeeForm::new(store.clone(), Some(id), || {})?;
    if let Some(name) = name {
        form.set_name(name);
    }
    if let Some(description) = description {
        form.set_description(description);
    }
    match parent {
        ParentChange::Keep => {}
        ParentChange::Set(parent_id) => form.set_parent_id(Some(parent_id)),
        ParentChange::Clear => form.set_parent_id(None),
    }
    form.submit()
}

/// Pretty JSON array of positions, camelCase keys as in the data file
pub fn employees_json(employees: &[Employee]) -> Result<String> {
    Ok(serde_json::to_string_pretty(employees)?)
}

/// Plain-text table of positions
pub fn format_table(employees: &[Employee]) -> Vec<String> {
    let name_width = employees
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut lines = vec![format!(
        "{:>6}  {:<name_width$}  {:<16}  {}",
        "ID", "Name", "Parent", "Description"
    )];
    lines.extend(employees.iter().map(|e| {
        format!(
            "{:>6}  {:<name_width$}  {:<16}  {}",
            e.id,
            e.name,
            parent_column(e, employees),
            e.description
        )
    }));
    lines
}

/// Problems found in a loaded employee list; empty when the list is clean
pub fn check_employees(employees: &[Employee]) -> Vec<String> {
    let mut problems: Vec<String> = dangling_parents(employees)
        .into_iter()
        .map(|(id, parent)| format!("Position {} references missing parent {}", id, parent))
        .collect();
    problems.extend(
        duplicate_ids(employees)
            .into_iter()
            .map(|id| format!("Id {} is used by more than one position", id)),
    );
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{lock_store, EmployeeStore};
    use crate::validation::Field;

    fn store() -> SharedStore {
        EmployeeStore::from_employees(vec![
            Employee::new(1, "CEO", "Top", None),
            Employee::new(5, "CTO", "Engineering", Some(1)),
        ])
        .into_shared()
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let shared = store();
        match add_employee(&shared, "", "", None).unwrap() {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.get(Field::Name), Some("Name is required"));
                assert_eq!(errors.get(Field::Description), Some("Description is required"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(lock_store(&shared).unwrap().len(), 2);
    }

    #[test]
    fn test_update_keeps_omitted_fields() {
        let shared = store();
        let outcome = update_employee(&shared, 5, None, Some("Builds"), ParentChange::Clear).unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated { id: 5, applied: true });

        let store = lock_store(&shared).unwrap();
        let cto = store.find(5).unwrap();
        assert_eq!(cto.name, "CTO");
        assert_eq!(cto.description, "Builds");
        assert_eq!(cto.parent_id, None);
    }

    #[test]
    fn test_update_unknown_id_without_fields_is_rejected() {
        let shared = store();
        let outcome = update_employee(&shared, 99, None, None, ParentChange::Keep).unwrap();
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_parent_change_from_flags() {
        assert_eq!(ParentChange::from_flags(Some(2), false), ParentChange::Set(2));
        assert_eq!(ParentChange::from_flags(None, true), ParentChange::Clear);
        assert_eq!(ParentChange::from_flags(None, false), ParentChange::Keep);
    }

    #[test]
    fn test_format_table_has_header_and_rows() {
        let shared = store();
        let store = lock_store(&shared).unwrap();
        let lines = format_table(store.list_employees());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Description"));
        assert!(lines[2].contains("CTO") && lines[2].contains("CEO"));
    }

    #[test]
    fn test_employees_json_lists_records() {
        let shared = store();
        let store = lock_store(&shared).unwrap();
        let json = employees_json(store.list_employees()).unwrap();
        let parsed: Vec<Employee> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store.list_employees());
        assert!(json.contains("\"parentId\": 1"));
    }

    #[test]
    fn test_check_employees_reports_problems() {
        let employees = vec![
            Employee::new(1, "CEO", "Top", None),
            Employee::new(1, "Dup", "Same id", Some(4)),
        ];
        let problems = check_employees(&employees);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("missing parent 4"));
    }

    #[test]
    fn test_check_employees_reports_duplicates_alone() {
        let employees = vec![
            Employee::new(3, "CEO", "Top", None),
            Employee::new(3, "CFO", "Finance", Some(3)),
        ];
        assert_eq!(
            check_employees(&employees),
            vec!["Id 3 is used by more than one position".to_string()]
        );
    }

    #[test]
    fn test_check_employees_clean_list() {
        let shared = store();
        let store = lock_store(&shared).unwrap();
        assert!(check_employees(store.list_employees()).is_empty());
    }
}
