//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, status line and navigation bar
//! - `list` - Employee list table
//! - `dialogs` - Position form dialog

mod dialogs;
mod header;
mod list;

pub use dialogs::parent_label;
pub use list::parent_column;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::employee::Employee;
use crate::form::EmployeeForm;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rectangle of `percent_x` by `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        employees: &[Employee],
        form: Option<&EmployeeForm>,
        keybinding_ctx: &KeybindingContext,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Employee list
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title(f, main_chunks[0], employees.len());
        list::render_employee_list(
            f,
            main_chunks[1],
            employees,
            state.list_selection,
            state.mode == AppMode::EmployeeList,
        );
        header::render_status(f, main_chunks[2], state);
        header::render_nav_bar(f, main_chunks[3], &keybinding_ctx.get_nav_items(&state.mode));

        if state.mode == AppMode::PositionForm {
            if let Some(form) = form {
                dialogs::render_position_form(f, f.area(), form, employees);
            }
        }

        // Help overlay goes on top of everything
        if state.help_visible {
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, f.area());
        }
    }

    /// Render a full-screen error when the store cannot be read
    pub fn render_fatal(&self, f: &mut Frame, message: &str) {
        let widget = Paragraph::new(message.to_string())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error ")
                    .border_style(Styles::error()),
            )
            .style(Styles::error())
            .wrap(Wrap { trim: true });
        f.render_widget(widget, f.area());
    }
}
