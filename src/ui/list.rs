//! Employee list table

use crate::employee::Employee;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Text of the parent column for `employee`.
///
/// Roots show "—"; a parent id with no matching record is shown as
/// `#<id> (missing)` since the store does not enforce references.
pub fn parent_column(employee: &Employee, employees: &[Employee]) -> String {
    match employee.parent_id {
        None => "—".to_string(),
        Some(parent_id) => employees
            .iter()
            .find(|e| e.id == parent_id)
            .map(|parent| parent.name.clone())
            .unwrap_or_else(|| format!("#{} (missing)", parent_id)),
    }
}

/// Render the list of positions with the selected row highlighted
pub fn render_employee_list(
    f: &mut Frame,
    area: Rect,
    employees: &[Employee],
    selection: usize,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Positions ")
        .title_style(Styles::title())
        .border_style(Theme::border(focused));

    if employees.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No positions yet. Press A to add the first one.",
            Styles::placeholder(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Name", "Parent", "Description"]).style(Styles::label());
    let rows: Vec<Row> = employees
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(e.id.to_string()),
                Cell::from(e.name.clone()),
                Cell::from(parent_column(e, employees)),
                Cell::from(e.description.clone()).style(Styles::text_secondary()),
            ])
            .style(Styles::text())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected())
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(selection));
    f.render_stateful_widget(table, area, &mut table_state);
}
