//! Snapshot file handling for saving and loading the employee list.
//!
//! The snapshot is pretty-printed JSON:
//!
//! ```json
//! {
//!   "employees": [
//!     { "id": 1, "name": "CEO", "description": "Top", "parentId": null }
//!   ]
//! }
//! ```
//!
//! A missing file loads as an empty list so the first run needs no setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::employee::{Employee, EmployeeId};
use crate::store::{lock_store, EmployeeStore, SharedStore};

/// On-disk representation of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl StoreSnapshot {
    /// Capture the current contents of a store
    pub fn from_store(store: &EmployeeStore) -> Self {
        Self {
            employees: store.list_employees().to_vec(),
        }
    }

    /// Lock a shared store and capture its contents
    pub fn from_shared(store: &SharedStore) -> Result<Self> {
        Ok(Self::from_store(&*lock_store(store)?))
    }

    /// Build a store from this snapshot; new ids continue after the largest one
    pub fn into_store(self) -> EmployeeStore {
        EmployeeStore::from_employees(self.employees)
    }

    /// Save snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize employee snapshot to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write employee snapshot to {:?}", path.as_ref()))?;

        info!(count = self.employees.len(), path = ?path.as_ref(), "Saved employee snapshot");
        Ok(())
    }

    /// Load snapshot from a JSON file, or an empty one if the file does not exist
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No employee snapshot found, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read employee snapshot from {:?}", path))?;

        let snapshot: Self =
            serde_json::from_str(&content).context("Failed to parse employee snapshot JSON")?;

        info!(count = snapshot.employees.len(), ?path, "Loaded employee snapshot");
        Ok(snapshot)
    }
}

/// Records whose parent id does not match any record, as `(id, parent_id)`
pub fn dangling_parents(employees: &[Employee]) -> Vec<(EmployeeId, EmployeeId)> {
    let ids: HashSet<EmployeeId> = employees.iter().map(|e| e.id).collect();
    employees
        .iter()
        .filter_map(|e| e.parent_id.map(|p| (e.id, p)))
        .filter(|(_, parent)| !ids.contains(parent))
        .collect()
}

/// Ids that appear on more than one record, in first-seen order
pub fn duplicate_ids(employees: &[Employee]) -> Vec<EmployeeId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for employee in employees {
        if !seen.insert(employee.id) && !duplicates.contains(&employee.id) {
            duplicates.push(employee.id);
        }
    }
    duplicates
}
