//! Position form schema and validation
//!
//! The schema is declarative: each [`Field`] carries a [`Rule`], and
//! [`validate`] evaluates every rule top-to-bottom, independently of the
//! others. Validation is a pure function over [`FormValues`], so it can be
//! exercised without building a form.
//!
//! # Rules
//!
//! | Field         | Rule                        | Message                   |
//! |---------------|-----------------------------|---------------------------|
//! | `name`        | required, non-empty text    | "Name is required"        |
//! | `description` | required, non-empty text    | "Description is required" |
//! | `parentId`    | optional integer, may be null | always passes           |
//!
//! There are no cross-field rules: a record may name itself as its parent.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::employee::EmployeeId;

/// Fields of the position form, in display and validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "parentId")]
    ParentId,
}

/// A single schema rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must be present and non-empty; carries the failure message
    Required(&'static str),
    /// Value may be absent; never fails
    Optional,
}

impl Field {
    /// Schema rule for this field
    pub const fn rule(self) -> Rule {
        match self {
            Field::Name => Rule::Required("Name is required"),
            Field::Description => Rule::Required("Description is required"),
            Field::ParentId => Rule::Optional,
        }
    }

    /// Label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::ParentId => "Parent Position",
        }
    }

    /// Hint shown while the input is empty
    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter position name",
            Field::Description => "Enter position description",
            Field::ParentId => "Select parent position",
        }
    }

    /// Next field in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Description,
            Field::Description => Field::ParentId,
            Field::ParentId => Field::Name,
        }
    }

    /// Previous field in tab order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::ParentId,
            Field::Description => Field::Name,
            Field::ParentId => Field::Description,
        }
    }
}

/// Raw, uncommitted values held by the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub description: String,
    pub parent_id: Option<EmployeeId>,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent_id,
        }
    }

    /// Text content of a text field; `None` for non-text fields
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Description => Some(&self.description),
            Field::ParentId => None,
        }
    }
}

/// Values that passed every rule in the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedValues {
    pub name: String,
    pub description: String,
    pub parent_id: Option<EmployeeId>,
}

/// Per-field validation messages, kept in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.entries.push((field, message));
    }

    /// Message attached to `field`, if it failed
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    /// Drop the message attached to `field`
    pub fn clear(&mut self, field: Field) {
        self.entries.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.entries.iter().map(|(_, m)| *m).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn check(field: Field, values: &FormValues) -> Option<&'static str> {
    match field.rule() {
        Rule::Required(message) => match values.text(field) {
            Some(text) if !text.is_empty() => None,
            _ => Some(message),
        },
        Rule::Optional => None,
    }
}

/// Validate form values against the position schema.
///
/// Every field is checked; on failure the returned [`FieldErrors`] holds one
/// message per failing field, in schema order.
pub fn validate(values: &FormValues) -> Result<ValidatedValues, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::iter() {
        if let Some(message) = check(field, values) {
            errors.push(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedValues {
        name: values.name.clone(),
        description: values.description.clone(),
        parent_id: values.parent_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values_pass_through() {
        let values = FormValues::new("CTO", "Runs engineering", Some(1));
        let validated = validate(&values).unwrap();
        assert_eq!(validated.name, "CTO");
        assert_eq!(validated.description, "Runs engineering");
        assert_eq!(validated.parent_id, Some(1));
    }

    #[test]
    fn test_empty_name_reports_name_only() {
        let errors = validate(&FormValues::new("", "Runs engineering", None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Description), None);
    }

    #[test]
    fn test_all_fields_checked_independently() {
        let errors = validate(&FormValues::default()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Description]);
        assert_eq!(errors.to_string(), "Name is required; Description is required");
    }

    #[test]
    fn test_parent_is_optional() {
        assert!(validate(&FormValues::new("CEO", "Top", None)).is_ok());
    }

    #[test]
    fn test_no_cross_field_rules() {
        // A record naming itself as parent is not rejected here.
        assert!(validate(&FormValues::new("Loop", "Self parent", Some(7))).is_ok());
    }

    #[test]
    fn test_clear_removes_single_field() {
        let mut errors = validate(&FormValues::default()).unwrap_err();
        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Description), Some("Description is required"));
    }

    #[test]
    fn test_field_tab_order_wraps() {
        assert_eq!(Field::ParentId.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::ParentId);
        assert_eq!(Field::ParentId.to_string(), "parentId");
    }
}
