//! Driver assistance dashboard

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tourbus_core::telemetry::assistance::{
    self, AssistanceStatus, Severity, ACTIONS, ALERTS, METRICS, SUMMARY,
};

use super::field;
use crate::app::App;
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::{Theme, Tone};

fn status_style(status: AssistanceStatus, theme: &Theme) -> Style {
    theme.tone(match status {
        AssistanceStatus::Active => Tone::Good,
        AssistanceStatus::Standby => Tone::Info,
        AssistanceStatus::Warning => Tone::Warning,
        AssistanceStatus::Offline => Tone::Muted,
    })
}

fn severity_style(severity: Severity, theme: &Theme) -> Style {
    theme.tone(match severity {
        Severity::Info => Tone::Info,
        Severity::Caution => Tone::Warning,
        Severity::Critical => Tone::Danger,
    })
}

/// Draw driver assistance
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let sections = rows(area, &[4]);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(SUMMARY.route_name, theme.title()),
            Span::styled("  ", theme.text()),
            Span::styled(
                SUMMARY.system_status.label(),
                status_style(SUMMARY.system_status, theme),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("Ασφάλεια {}", SUMMARY.safety_score), theme.text()),
            Span::styled(format!(" · {}", SUMMARY.conditions), theme.text_secondary()),
            Span::styled(format!(" · Διάλειμμα {}", SUMMARY.next_break), theme.text_secondary()),
            Span::styled(format!(" · {}", SUMMARY.last_update), theme.text_muted()),
        ]),
    ])
    .block(section_block("Σύνοψη", theme));
    frame.render_widget(summary, sections[0]);

    let (left, right) = two_column_layout(sections[1], 50);

    let mut left_lines: Vec<Line> = METRICS
        .iter()
        .map(|metric| {
            let value = match metric.unit {
                Some(unit) => format!("{} {}", metric.value, unit),
                None => metric.value.to_string(),
            };
            Line::from(vec![
                Span::styled(format!("{}: ", metric.label), theme.text_muted()),
                Span::styled(value, status_style(metric.status, theme)),
                Span::styled(format!("  {}", metric.helper), theme.text_muted()),
            ])
        })
        .collect();
    left_lines.push(Line::raw(""));
    left_lines.push(Line::styled("Συστήματα", theme.text_highlight()));
    for action in ACTIONS {
        left_lines.push(Line::from(vec![
            Span::styled(format!("  {} ", action.label), theme.text()),
            Span::styled(format!("[{}]", action.status_label), status_style(action.status, theme)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(left_lines)
            .scroll((app.state.scroll, 0))
            .block(section_block("Δείκτες", theme)),
        left,
    );

    let mut right_lines = Vec::new();
    for alert in ALERTS {
        right_lines.push(Line::from(vec![
            Span::styled(format!("{} ", alert.severity.label()), severity_style(alert.severity, theme)),
            Span::styled(alert.title, theme.text()),
            Span::styled(format!("  {}", alert.time), theme.text_muted()),
        ]));
        right_lines.push(Line::styled(format!("  {}", alert.description), theme.text_secondary()));
    }
    right_lines.push(Line::raw(""));
    let open = assistance::open_checks().count();
    right_lines.push(field("Έλεγχοι σε εκκρεμότητα", open.to_string(), theme));
    for item in assistance::CHECKLIST {
        let mark = if item.status == AssistanceStatus::Active { "☑" } else { "☐" };
        right_lines.push(Line::from(vec![
            Span::styled(format!("  {} {}", mark, item.title), status_style(item.status, theme)),
            Span::styled(format!(" - {}", item.detail), theme.text_muted()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(right_lines)
            .wrap(Wrap { trim: false })
            .block(section_block("Ειδοποιήσεις & Checklist", theme)),
        right,
    );
}
