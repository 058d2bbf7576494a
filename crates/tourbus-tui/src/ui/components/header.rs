//! Header component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Theme;

/// Render the header bar with the navigation breadcrumb
pub fn render(frame: &mut Frame, area: Rect, breadcrumb: &[&str], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22),
            Constraint::Min(20),
            Constraint::Length(8),
        ])
        .split(inner);

    let logo = Paragraph::new(" \u{25C6} SMART TOURIST BUS").style(theme.title());
    frame.render_widget(logo, chunks[0]);

    let crumb = Paragraph::new(breadcrumb.join(" › "))
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(crumb, chunks[1]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let time_widget = Paragraph::new(time)
        .style(theme.text_muted())
        .alignment(Alignment::Right);
    frame.render_widget(time_widget, chunks[2]);
}
