//! Application state definitions
//!
//! Contains the UI-side state of the app. Employee records are not stored
//! here; they live in the shared store and are read at render time.

use crate::theme::StatusKind;

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// List of positions - entry point
    EmployeeList,
    /// Modal form creating or editing a position
    PositionForm,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Highlighted row in the employee list
    pub list_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// How the status message should be styled
    pub status_kind: StatusKind,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    /// Replace the status bar message
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Keep the list selection inside a list of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.list_selection = self.list_selection.min(len.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::EmployeeList,
            list_selection: 0,
            status_message: "Press A to add a position".to_string(),
            status_kind: StatusKind::Info,
            help_visible: false,
        }
    }
}
