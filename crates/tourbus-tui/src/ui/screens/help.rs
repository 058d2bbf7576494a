//! Online help for the current role

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tourbus_core::help_for;

use crate::app::App;
use crate::ui::layout::section_block;

/// Draw the help screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let help = help_for(app.role());

    let mut lines = vec![
        Line::styled(help.title, theme.title()),
        Line::styled(help.subtitle, theme.text_secondary()),
        Line::raw(""),
        Line::styled(help.quick_actions_title, theme.text_highlight()),
    ];
    for action in help.quick_actions {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {}", action.title), theme.text()),
            Span::styled(format!(" - {}", action.description), theme.text_muted()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(help.guidance_title, theme.text_highlight()));
    for (i, tip) in help.guidance.iter().enumerate() {
        lines.push(Line::styled(format!("  {}. {}", i + 1, tip), theme.text()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(help.contact_title, theme.text_highlight()));
    for contact in help.contacts {
        lines.push(Line::from(vec![
            Span::styled(format!("  ☎ {}", contact.label), theme.text()),
            Span::styled(format!(" - {}", contact.description), theme.text_muted()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll, 0))
        .block(section_block("Βοήθεια", theme));
    frame.render_widget(paragraph, area);
}
