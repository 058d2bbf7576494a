//! Staff login form

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::{App, LoginField, MAX_INPUT_LEN};
use crate::ui::layout::{centered_rect, rows, section_block, section_block_focused};

/// Draw the login screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let form = &app.state.login;

    let dialog = centered_rect(60, 90, area);
    frame.render_widget(Clear, dialog);

    let block = section_block_focused("Πρόσβαση Προσωπικού", theme);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = rows(inner, &[2, 3, 3, 2, 2]);

    let subtitle = Paragraph::new(Line::styled(
        "Συνδέσου ως οδηγός, υπάλληλος ή διαχειριστής.",
        theme.text_secondary(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    render_input(
        frame,
        chunks[1],
        "Όνομα χρήστη",
        &form.username,
        form.focus == LoginField::Username,
        app,
    );
    render_input(
        frame,
        chunks[2],
        "Κωδικός",
        &form.masked_password(),
        form.focus == LoginField::Password,
        app,
    );

    if let Some(error) = &form.error {
        let error = Paragraph::new(Line::styled(format!("✗ {}", error), theme.danger()))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);
    }

    let role = Paragraph::new(Line::styled(
        format!("Τρέχων ρόλος: {}", app.role().label()),
        theme.text_muted(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(role, chunks[4]);

    let helper = Paragraph::new(Line::styled(
        "Δοκιμαστικά στοιχεία: driver/driver123, employee/employee123",
        theme.text_muted(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(helper, chunks[5]);
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, app: &App) {
    let theme = &app.theme;
    let len = value.chars().count();
    let title = if len >= MAX_INPUT_LEN {
        format!("{} · γεμάτο {}/{}", label, len, MAX_INPUT_LEN)
    } else {
        label.to_string()
    };
    let block = if focused {
        section_block_focused(&title, theme)
    } else {
        section_block(&title, theme)
    };

    // Keep the end of long input and the cursor in view
    let visible = area.width.saturating_sub(3) as usize;
    let tail: String = value.chars().skip(len.saturating_sub(visible)).collect();
    let cursor = if focused { "▏" } else { "" };
    let input = Paragraph::new(format!("{}{}", tail, cursor))
        .style(theme.input(focused))
        .block(block);
    frame.render_widget(input, area);
}
