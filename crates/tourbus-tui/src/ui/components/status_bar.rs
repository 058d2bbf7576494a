//! Status bar component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use tourbus_core::Role;

use crate::ui::Theme;

/// Who is signed in, as shown at the bottom of every screen
pub struct SessionStatus<'a> {
    pub role: Role,
    pub username: Option<&'a str>,
}

/// Render the status bar: session on the left, key hints on the right
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &SessionStatus<'_>,
    hints: &[(&str, &str)],
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(inner);

    let indicator = if status.role.is_staff() { "●" } else { "○" };
    let indicator_style = if status.role.is_staff() {
        theme.success()
    } else {
        theme.text_muted()
    };

    let mut left = vec![
        Span::styled(format!("{} ", indicator), indicator_style),
        Span::styled(format!("Ρόλος: {}", status.role.label()), theme.text()),
    ];
    if let Some(username) = status.username {
        left.push(Span::styled(format!(" ({})", username), theme.text_secondary()));
    }
    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

    render_help_footer(frame, chunks[1], hints, theme);
}

/// Render help hints in footer
pub fn render_help_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {} ", action), theme.text_muted()),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
