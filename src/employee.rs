//! Employee (org-chart position) records.

use serde::{Deserialize, Serialize};

/// Identifier of an employee record. Immutable once assigned.
pub type EmployeeId = u64;

/// A named node in the org chart with an optional parent reference.
///
/// `parent_id` is expected to reference an existing record (or be `None` for
/// a root) and the parent chain is expected to be acyclic. Neither is
/// enforced here; see [`crate::store_file::dangling_parents`] for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub description: String,
    pub parent_id: Option<EmployeeId>,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            parent_id,
        }
    }
}
