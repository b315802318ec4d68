//! Position form dialog rendering
//!
//! Draws the open [`EmployeeForm`] as a centered modal: one bordered input per
//! field, the field's validation message directly underneath, and the submit
//! button at the bottom.

use crate::employee::{Employee, EmployeeId};
use crate::form::{parent_options, EmployeeForm, ParentOption};
use crate::theme::{Styles, Theme};
use crate::validation::Field;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 17;

/// Text shown for the selected parent
pub fn parent_label(options: &[ParentOption], parent_id: Option<EmployeeId>) -> String {
    options
        .iter()
        .find(|o| o.value == parent_id)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| match parent_id {
            Some(id) => format!("#{} (missing)", id),
            None => crate::form::NO_PARENT_LABEL.to_string(),
        })
}

/// Render the position form on top of the current screen
pub fn render_position_form(f: &mut Frame, area: Rect, form: &EmployeeForm, employees: &[Employee]) {
    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, dialog_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .title_style(Styles::title())
        .border_style(Styles::border_active())
        .style(Styles::panel_bg());
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    // Input (3 rows) + message (1 row) per field, then the button
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let options = parent_options(employees);
    for (i, field) in Field::iter().enumerate() {
        render_field(f, chunks[i * 2], form, field, &options);
        if let Some(message) = form.error(field) {
            let error = Paragraph::new(format!(" {}", message)).style(Styles::error());
            f.render_widget(error, chunks[i * 2 + 1]);
        }
    }

    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", form.submit_label()),
        Styles::button_active(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[6]);
}

fn render_field(f: &mut Frame, area: Rect, form: &EmployeeForm, field: Field, options: &[ParentOption]) {
    let focused = form.focus() == field;
    let has_error = form.error(field).is_some();

    let border_style = if has_error {
        Styles::error()
    } else {
        Theme::border(focused)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .title_style(Styles::label())
        .border_style(border_style);

    let value_style = if focused { Styles::focused() } else { Styles::text() };
    let line = match form.values().text(field) {
        Some("") if !focused => Line::styled(field.placeholder(), Styles::placeholder()),
        Some(text) => {
            let mut spans = vec![Span::styled(text.to_string(), value_style)];
            if focused {
                spans.push(Span::styled("_", value_style));
            }
            Line::from(spans)
        }
        None => {
            let label = parent_label(options, form.values().parent_id);
            if focused {
                Line::styled(format!("< {} >", label), value_style)
            } else {
                Line::styled(label, value_style)
            }
        }
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
