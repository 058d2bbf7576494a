//! Crew control dashboard

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use tourbus_core::telemetry::crew::{
    self, AlertSeverity, CoverageStatus, StaffStatus, TaskStatus, ALERTS, COVERAGE, INFO, ROSTER,
    TASKS,
};

use crate::app::App;
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::{Theme, Tone};

fn coverage_style(status: CoverageStatus, theme: &Theme) -> Style {
    theme.tone(match status {
        CoverageStatus::Ok => Tone::Good,
        CoverageStatus::Thin => Tone::Warning,
        CoverageStatus::Critical => Tone::Danger,
    })
}

/// Draw crew control
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let sections = rows(area, &[4, 10]);

    let readiness = crew::readiness();
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} · {}", INFO.vehicle_id, INFO.route_name), theme.title()),
            Span::styled(format!("  Ετοιμότητα: {}", readiness.label()), coverage_style(readiness, theme)),
        ]),
        Line::styled(
            format!(
                "Βάρδια {} · Επί του οχήματος {}/{} · Αλλαγή {} · {}",
                INFO.shift_window,
                crew::onboard_count(),
                crew::required_count(),
                INFO.next_changeover,
                INFO.last_update
            ),
            theme.text_secondary(),
        ),
    ])
    .block(section_block("Πλήρωμα", theme));
    frame.render_widget(summary, sections[0]);

    let (coverage_area, roster_area) = two_column_layout(sections[1], 35);

    let coverage: Vec<Line> = COVERAGE
        .iter()
        .map(|role| {
            let status = role.status();
            Line::from(vec![
                Span::styled(format!("{} ", role.role), theme.text()),
                Span::styled(format!("{}/{} ", role.assigned, role.required), theme.text_secondary()),
                Span::styled(status.label(), coverage_style(status, theme)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(coverage).block(section_block("Κάλυψη ρόλων", theme)),
        coverage_area,
    );

    let roster_rows: Vec<Row> = ROSTER
        .iter()
        .map(|member| {
            let tone = match member.status {
                StaffStatus::OnDuty => Tone::Good,
                StaffStatus::Break | StaffStatus::Training => Tone::Warning,
                StaffStatus::Support => Tone::Info,
                StaffStatus::OffDuty => Tone::Muted,
            };
            Row::new(vec![
                Cell::from(member.name),
                Cell::from(member.role),
                Cell::from(member.status.label()).style(theme.tone(tone)),
                Cell::from(member.location),
                Cell::from(member.shift),
            ])
        })
        .collect();
    let roster = Table::new(
        roster_rows,
        [
            Constraint::Min(14),
            Constraint::Min(12),
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(13),
        ],
    )
    .header(
        Row::new(vec!["Όνομα", "Ρόλος", "Κατάσταση", "Θέση", "Βάρδια"]).style(theme.text_highlight()),
    )
    .style(theme.text())
    .block(section_block("Προσωπικό", theme));
    frame.render_widget(roster, roster_area);

    let (alerts_area, tasks_area) = two_column_layout(sections[2], 50);

    let alerts: Vec<Line> = ALERTS
        .iter()
        .flat_map(|alert| {
            let style = theme.tone(match alert.severity {
                AlertSeverity::Info => Tone::Info,
                AlertSeverity::Attention => Tone::Warning,
                AlertSeverity::Urgent => Tone::Danger,
            });
            [
                Line::from(vec![
                    Span::styled(format!("{} ", alert.severity.label()), style),
                    Span::styled(alert.title, theme.text()),
                    Span::styled(format!("  {}", alert.time), theme.text_muted()),
                ]),
                Line::styled(format!("  {}", alert.description), theme.text_secondary()),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(alerts)
            .scroll((app.state.scroll, 0))
            .block(section_block("Ειδοποιήσεις", theme)),
        alerts_area,
    );

    let tasks: Vec<Line> = TASKS
        .iter()
        .map(|task| {
            let (mark, style) = match task.status {
                TaskStatus::Done => ("☑", theme.success()),
                TaskStatus::InProgress => ("◐", theme.info()),
                TaskStatus::Pending => ("☐", theme.text_muted()),
            };
            Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(task.title, theme.text()),
                Span::styled(
                    format!(" · {} · {} · {}", task.area, task.owner, task.due),
                    theme.text_muted(),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(tasks).block(section_block("Εργασίες", theme)),
        tasks_area,
    );
}
