//! Splash screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::progress::Spinner;
use crate::ui::layout::centered_rect;

const LOGO: [&str; 5] = [
    "   ___________________________   ",
    "  |  _  _  _  _  _  _  _  _  \\_ ",
    "  | |_||_||_||_||_||_||_||_|    |",
    "  |_____________________________|",
    "     (o)                  (o)    ",
];

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let inner = centered_rect(60, 60, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO.len() as u16 + 1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::styled(*row, app.theme.title()))
        .collect();
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[0]);

    let title = Paragraph::new(vec![
        Line::styled("SMART TOURIST BUS", app.theme.title()),
        Line::styled("Έξυπνο Τουριστικό Λεωφορείο", app.theme.text_secondary()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let mut spinner = Spinner::new("Φόρτωση συστημάτων οχήματος");
    spinner.set_tick(app.tick);
    spinner.render(frame, chunks[2], &app.theme);

    // Blinking prompt
    if (app.tick / 10) % 2 == 0 {
        let prompt = Paragraph::new("Πάτησε οποιοδήποτε πλήκτρο για συνέχεια")
            .style(app.theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[3]);
    }

    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    let version_width = version.len() as u16 + 1;
    let version_area = Rect::new(
        area.x + area.width.saturating_sub(version_width),
        area.y + area.height.saturating_sub(1),
        version_width.min(area.width),
        1.min(area.height),
    );
    frame.render_widget(
        Paragraph::new(version).style(app.theme.text_muted()),
        version_area,
    );
}
