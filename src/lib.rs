//! Org chart position editor
//!
//! A form for creating and updating org-chart positions, backed by a pure
//! schema validator and an explicit in-process store, plus the terminal UI
//! and headless commands that drive it.

pub mod app;
pub mod cli;
pub mod commands;
pub mod components;
pub mod employee;
pub mod error;
pub mod form;
pub mod store;
pub mod store_file;
pub mod theme;
pub mod ui;
pub mod validation;

// Re-export main types for convenience
pub use employee::{Employee, EmployeeId};
pub use error::{OrgChartError, Result};
pub use form::{EmployeeForm, ParentOption, SubmitOutcome, NO_PARENT_LABEL};
pub use store::{
    lock_store, CounterIdSource, EmployeeAction, EmployeeStore, IdSource, SharedStore,
};
pub use store_file::StoreSnapshot;
pub use validation::{validate, Field, FieldErrors, FormValues, ValidatedValues};
