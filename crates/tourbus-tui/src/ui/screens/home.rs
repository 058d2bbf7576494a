//! Home screen: shortcut cards and the staff login panel

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};

use crate::app::App;
use crate::ui::layout::{section_block, section_block_focused, two_column_layout};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (left, right) = two_column_layout(area, 62);

    let cards = app.shortcuts();
    if cards.is_empty() {
        let welcome = Paragraph::new(vec![
            Line::styled("Καλώς ήρθες στο Smart Tourist Bus!", theme.title()),
            Line::raw(""),
            Line::styled(
                "Οι πίνακες ελέγχου του οχήματος είναι διαθέσιμοι μόνο στο προσωπικό.",
                theme.text_secondary(),
            ),
            Line::styled(
                "Πάτησε [?] για online βοήθεια επιβατών.",
                theme.text_muted(),
            ),
            Line::styled(
                "Πάτησε [c] για καφέ και σνακ στη θέση σου.",
                theme.text_muted(),
            ),
        ])
        .wrap(Wrap { trim: true })
        .block(section_block("Αρχική", theme));
        frame.render_widget(welcome, left);
    } else {
        let items: Vec<ListItem> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let selected = i == app.state.home_index;
                let marker = if selected { "▸" } else { " " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!(" {} {}", marker, card.title), theme.menu_item(selected)),
                        Span::styled(format!("  [{}]", card.tag), theme.text_muted()),
                    ]),
                    Line::styled(format!("     {}", card.description), theme.text_secondary()),
                ])
            })
            .collect();

        let list = List::new(items).block(section_block_focused("Συντομεύσεις", theme));
        frame.render_widget(list, left);
    }

    let session = match app.username() {
        Some(username) => Paragraph::new(vec![
            Line::styled(
                format!("Συνδεδεμένος ως {}", app.role().label()),
                theme.success(),
            ),
            Line::styled(format!("Χρήστης: {}", username), theme.text()),
            Line::raw(""),
            Line::styled("Αποσύνδεση [l]", theme.text_highlight()),
        ])
        .block(section_block("Προσωπικό", theme)),
        None => Paragraph::new(vec![
            Line::styled(
                "Οδηγοί, υπάλληλοι και διαχειριστές συνδέονται εδώ.",
                theme.text_secondary(),
            ),
            Line::raw(""),
            Line::styled("Σύνδεση προσωπικού [l]", theme.text_highlight()),
        ])
        .wrap(Wrap { trim: true })
        .block(section_block("Πρόσβαση Προσωπικού", theme)),
    };
    frame.render_widget(session, right);
}
