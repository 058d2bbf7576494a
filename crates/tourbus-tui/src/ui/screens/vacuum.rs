//! Robot vacuum dashboard

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tourbus_core::telemetry::vacuum::{
    AlertSeverity, MaintenanceStatus, MeterStatus, RunStatus, ZoneStatus, ALERTS, INFO,
    MAINTENANCE, METERS, METRICS, ZONES,
};

use super::field;
use crate::app::App;
use crate::ui::components::progress::ProgressBar;
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::Tone;

/// Draw the robot vacuum
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let vacuum = &app.telemetry.vacuum;
    let sections = rows(area, &[7, 8]);

    let (status_area, meters_area) = two_column_layout(sections[0], 50);

    let block = section_block(INFO.robot_name, theme);
    let inner = block.inner(status_area);
    frame.render_widget(block, status_area);
    let status_rows = rows(inner, &[1, 1, 1, 1]);

    let status_tone = match vacuum.status {
        RunStatus::Cleaning => Tone::Good,
        RunStatus::Paused | RunStatus::Returning => Tone::Warning,
        RunStatus::Docked => Tone::Info,
        RunStatus::Idle => Tone::Muted,
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", INFO.model), theme.text_secondary()),
            Span::styled(vacuum.status.label(), theme.tone(status_tone)),
        ])),
        status_rows[0],
    );
    frame.render_widget(
        Paragraph::new(field("Ζώνη", INFO.current_zone, theme)),
        status_rows[1],
    );
    frame.render_widget(
        Paragraph::new(field(
            "Λειτουργία",
            format!("{} · Λήξη {}", INFO.mode_label, INFO.estimated_finish),
            theme,
        )),
        status_rows[2],
    );
    frame.render_widget(
        Paragraph::new(field("Βάση", INFO.dock_status, theme)),
        status_rows[3],
    );
    ProgressBar::from_percent(f64::from(vacuum.progress), "Κύκλος")
        .tone(status_tone)
        .render(frame, status_rows[4], theme);

    let meters: Vec<Line> = METERS
        .iter()
        .map(|meter| {
            let style = theme.tone(match meter.status {
                MeterStatus::Good => Tone::Good,
                MeterStatus::Attention => Tone::Warning,
                MeterStatus::Critical => Tone::Danger,
            });
            Line::from(vec![
                Span::styled(format!("{}: ", meter.label), theme.text_muted()),
                Span::styled(format!("{}%", meter.percent), style),
                Span::styled(format!("  {}", meter.hint), theme.text_muted()),
            ])
        })
        .chain(METRICS.iter().map(|metric| {
            Line::from(vec![
                Span::styled(format!("{}: ", metric.label), theme.text_muted()),
                Span::styled(metric.value, theme.text()),
                Span::styled(format!("  {}", metric.helper), theme.text_muted()),
            ])
        }))
        .collect();
    frame.render_widget(
        Paragraph::new(meters).block(section_block("Μετρήσεις", theme)),
        meters_area,
    );

    let (zones_area, maintenance_area) = two_column_layout(sections[1], 50);

    let zones: Vec<Line> = ZONES
        .iter()
        .map(|zone| {
            let style = theme.tone(match zone.status {
                ZoneStatus::Done => Tone::Good,
                ZoneStatus::InProgress => Tone::Info,
                ZoneStatus::Pending => Tone::Muted,
                ZoneStatus::Skipped => Tone::Warning,
            });
            Line::from(vec![
                Span::styled(format!("{} ", zone.name), theme.text()),
                Span::styled(zone.status.label(), style),
                Span::styled(
                    format!("  {} · {} · {}", zone.last_cleaned, zone.duration, zone.coverage),
                    theme.text_muted(),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(zones).block(section_block("Ζώνες καθαρισμού", theme)),
        zones_area,
    );

    let maintenance: Vec<Line> = MAINTENANCE
        .iter()
        .map(|item| {
            let style = theme.tone(match item.status {
                MaintenanceStatus::Ok => Tone::Good,
                MaintenanceStatus::Soon => Tone::Warning,
                MaintenanceStatus::Overdue => Tone::Danger,
            });
            Line::from(vec![
                Span::styled(format!("{} ", item.title), theme.text()),
                Span::styled(item.status.label(), style),
                Span::styled(format!("  {} → {}", item.detail, item.next_step), theme.text_muted()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(maintenance).block(section_block("Συντήρηση", theme)),
        maintenance_area,
    );

    let alerts: Vec<Line> = ALERTS
        .iter()
        .map(|alert| {
            let style = theme.tone(match alert.severity {
                AlertSeverity::Critical => Tone::Danger,
                AlertSeverity::Warning => Tone::Warning,
                AlertSeverity::Info => Tone::Info,
            });
            Line::from(vec![
                Span::styled(format!("{} ", alert.severity.label()), style),
                Span::styled(alert.title, theme.text()),
                Span::styled(format!(" - {} ", alert.description), theme.text_secondary()),
                Span::styled(alert.time, theme.text_muted()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(alerts)
            .scroll((app.state.scroll, 0))
            .block(section_block("Ειδοποιήσεις", theme)),
        sections[2],
    );
}
