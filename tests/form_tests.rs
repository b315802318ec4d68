//! Tests for the position form contract
//!
//! These tests verify:
//! - Initial values in create and edit mode
//! - Rejected submits dispatch nothing and skip the close callback
//! - Accepted submits dispatch exactly once and close exactly once
//! - Create vs update routing and id allocation
//! - Parent selector contents

use std::cell::Cell;
use std::rc::Rc;

use orgchart::{
    lock_store, Employee, EmployeeForm, EmployeeId, EmployeeStore, Field, FormValues,
    OrgChartError, SharedStore, SubmitOutcome, NO_PARENT_LABEL,
};

fn sample_store() -> SharedStore {
    EmployeeStore::from_employees(vec![
        Employee::new(1, "CEO", "Runs the company", None),
        Employee::new(2, "CTO", "Runs engineering", Some(1)),
        Employee::new(5, "Lead", "Leads a team", Some(2)),
    ])
    .into_shared()
}

fn open(store: &SharedStore, employee_id: Option<EmployeeId>) -> (EmployeeForm, Rc<Cell<u32>>) {
    let closes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closes);
    let form = EmployeeForm::new(store.clone(), employee_id, move || {
        counter.set(counter.get() + 1)
    })
    .expect("form opens");
    (form, closes)
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_edit_mode_starts_from_record() {
    let store = sample_store();
    let (form, _) = open(&store, Some(5));
    assert_eq!(form.values(), &FormValues::new("Lead", "Leads a team", Some(2)));
    assert!(form.is_edit());
}

#[test]
fn test_zero_id_is_edit_mode() {
    let store = EmployeeStore::from_employees(vec![Employee::new(0, "Founder", "Started it", None)])
        .into_shared();
    let (mut form, closes) = open(&store, Some(0));
    assert!(form.is_edit());
    assert_eq!(form.title(), "Edit Position");
    assert_eq!(form.values(), &FormValues::new("Founder", "Started it", None));

    form.set_name("Chair");
    assert_eq!(
        form.submit().unwrap(),
        SubmitOutcome::Updated { id: 0, applied: true }
    );
    assert_eq!(closes.get(), 1);
    let store = lock_store(&store).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.find(0).unwrap().name, "Chair");
}

#[test]
fn test_create_mode_starts_empty() {
    let store = sample_store();
    let (form, _) = open(&store, None);
    assert_eq!(form.values(), &FormValues::new("", "", None));
    assert!(form.errors().is_empty());
}

// =============================================================================
// Rejected submits
// =============================================================================

#[test]
fn test_empty_name_blocks_dispatch() {
    let store = sample_store();
    let (mut form, closes) = open(&store, None);
    form.set_description("Something");

    let outcome = form.submit().unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(form.error(Field::Name), Some("Name is required"));
    assert_eq!(closes.get(), 0);
    assert_eq!(lock_store(&store).unwrap().len(), 3);
}

#[test]
fn test_empty_description_blocks_update() {
    let store = sample_store();
    let (mut form, closes) = open(&store, Some(2));
    form.set_description("");

    let outcome = form.submit().unwrap();

    assert!(!outcome.is_accepted());
    assert_eq!(form.error(Field::Description), Some("Description is required"));
    assert_eq!(closes.get(), 0);
    assert_eq!(
        lock_store(&store).unwrap().find(2).unwrap().description,
        "Runs engineering"
    );
}

#[test]
fn test_rejected_submit_keeps_values_for_correction() {
    let store = sample_store();
    let (mut form, _) = open(&store, None);
    form.set_name("Designer");
    form.submit().unwrap();
    assert_eq!(form.values().name, "Designer");
}

// =============================================================================
// Accepted submits
// =============================================================================

#[test]
fn test_update_dispatches_with_given_id() {
    let store = sample_store();
    let (mut form, closes) = open(&store, Some(5));
    form.set_name("Staff Engineer");
    form.set_parent_id(Some(1));

    let outcome = form.submit().unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated { id: 5, applied: true });
    assert_eq!(closes.get(), 1);
    let store = lock_store(&store).unwrap();
    assert_eq!(store.len(), 3);
    let updated = store.find(5).unwrap();
    assert_eq!(updated.name, "Staff Engineer");
    assert_eq!(updated.description, "Leads a team");
    assert_eq!(updated.parent_id, Some(1));
}

#[test]
fn test_create_allocates_fresh_id() {
    let store = sample_store();
    let (mut form, closes) = open(&store, None);
    form.set_name("CFO");
    form.set_description("Runs finance");
    form.set_parent_id(Some(1));

    let outcome = form.submit().unwrap();

    let SubmitOutcome::Created(record) = outcome else {
        panic!("expected a created record");
    };
    assert_eq!(closes.get(), 1);
    assert!(![1, 2, 5].contains(&record.id));

    let store = lock_store(&store).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.list_employees().last(), Some(&record));
}

#[test]
fn test_consecutive_creates_get_distinct_ids() {
    let store = sample_store();
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let (mut form, _) = open(&store, None);
        form.set_name(name);
        form.set_description("x");
        if let SubmitOutcome::Created(record) = form.submit().unwrap() {
            ids.push(record.id);
        }
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_create_fails_when_ids_are_exhausted() {
    let store = EmployeeStore::from_employees(vec![Employee::new(u64::MAX, "Top", "Last id", None)])
        .into_shared();
    let (mut form, closes) = open(&store, None);
    form.set_name("Overflow");
    form.set_description("No id left");

    let err = form.submit().unwrap_err();

    assert!(matches!(err, OrgChartError::State(_)));
    assert_eq!(closes.get(), 0);
    assert_eq!(form.values().name, "Overflow");
    let ids: Vec<EmployeeId> = lock_store(&store)
        .unwrap()
        .list_employees()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![u64::MAX]);
}

#[test]
fn test_update_of_missing_record_is_silent_noop() {
    let store = sample_store();
    let (mut form, closes) = open(&store, Some(404));
    form.set_name("Ghost");
    form.set_description("Not there");

    let outcome = form.submit().unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated { id: 404, applied: false });
    assert_eq!(closes.get(), 1);
    assert_eq!(lock_store(&store).unwrap().len(), 3);
}

#[test]
fn test_successful_submit_discards_edit_state() {
    let store = sample_store();
    let (mut form, _) = open(&store, None);
    form.set_name("Ops");
    form.set_description("Operations");
    form.submit().unwrap();
    assert_eq!(form.values(), &FormValues::default());
}

// =============================================================================
// Parent selector
// =============================================================================

#[test]
fn test_parent_options_start_with_no_parent() {
    let store = sample_store();
    let (form, _) = open(&store, None);
    let options = form.parent_options().unwrap();

    assert_eq!(options.len(), 4);
    assert_eq!(options[0].label, NO_PARENT_LABEL);
    assert_eq!(options[0].value, None);
    let labels: Vec<&str> = options[1..].iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["CEO", "CTO", "Lead"]);
    assert_eq!(options[3].value, Some(5));
}

#[test]
fn test_parent_options_on_empty_store() {
    let store = EmployeeStore::new().into_shared();
    let (form, _) = open(&store, None);
    let options = form.parent_options().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "No Parent");
}
