//! Title bar, status line and navigation bar

use crate::app::AppState;
use crate::components::keybindings::NavBarItem;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar with the record count
pub fn render_title(f: &mut Frame, area: Rect, count: usize) {
    let noun = if count == 1 { "position" } else { "positions" };
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Org Chart", Styles::title()),
        Span::styled(format!("  ({} {})", count, noun), Styles::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive()),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Render the status message
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let status = Paragraph::new(format!(" {}", state.status_message))
        .style(Theme::status_style(state.status_kind));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            item.key_display.clone(),
            Style::default().fg(Colors::PRIMARY),
        ));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
