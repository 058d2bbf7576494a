//! Climate control dashboard

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use tourbus_core::telemetry::climate::{Mode, ZoneStatus};

use super::field;
use crate::app::App;
use crate::ui::components::progress::ProgressBar;
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::Tone;

/// Draw climate control
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let climate = &app.telemetry.climate;
    let sections = rows(area, &[4, 8]);

    let shift = &climate.shift;
    let power_style = if climate.powered {
        theme.success()
    } else {
        theme.danger()
    };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} · {}", shift.vehicle_id, shift.route_name), theme.title()),
            Span::styled(format!("  {}", climate.power_label()), power_style),
        ]),
        Line::styled(
            format!(
                "{} · {} · Οδηγός: {} · Θέσεις: {}",
                shift.time_window,
                shift.occupancy,
                shift.driver_name,
                climate.total_seats()
            ),
            theme.text_secondary(),
        ),
    ])
    .block(section_block("Βάρδια", theme));
    frame.render_widget(header, sections[0]);

    let (controls_area, metrics_area) = two_column_layout(sections[1], 50);

    let modes: Vec<Span> = Mode::ALL
        .iter()
        .map(|mode| {
            let selected = *mode == climate.mode;
            Span::styled(format!(" {} ", mode.label()), theme.menu_item(selected))
        })
        .collect();
    let controls = Paragraph::new(vec![
        Line::from(modes),
        field("Ανεμιστήρας", climate.fan.label(), theme),
        field("Ανακυκλοφορία", climate.recirculation, theme),
        field("Αντιθάμβωση", climate.defog, theme),
        field("Ποιότητα αέρα", climate.air_quality, theme),
        field("Φίλτρο", format!("{}%", climate.filter_health), theme),
    ])
    .block(section_block("Ρυθμίσεις", theme));
    frame.render_widget(controls, controls_area);

    let metrics = &climate.metrics;
    let block = section_block("Μετρήσεις", theme);
    let inner = block.inner(metrics_area);
    frame.render_widget(block, metrics_area);
    let metric_rows = rows(inner, &[5]);
    frame.render_widget(
        Paragraph::new(vec![
            field(
                "Καμπίνα / Στόχος",
                format!("{:.1}°C / {:.1}°C", metrics.cabin_temp, metrics.target_temp),
                theme,
            ),
            field("Εξωτερική", format!("{:.1}°C", metrics.outside_temp), theme),
            field("Υγρασία", format!("{}%", metrics.humidity), theme),
            field("CO₂", format!("{} ppm", metrics.co2_ppm), theme),
            field("Κατανάλωση", format!("{:.1} kWh/h", metrics.energy_use), theme),
        ]),
        metric_rows[0],
    );
    ProgressBar::from_percent(f64::from(metrics.eco_score), "Eco score")
        .tone(Tone::Good)
        .render(frame, metric_rows[1], theme);

    let (zones_area, schedule_area) = two_column_layout(sections[2], 55);

    let zone_rows: Vec<Row> = climate
        .zones
        .iter()
        .map(|zone| {
            let status = zone.status();
            let tone = match status {
                ZoneStatus::Stable => Tone::Good,
                ZoneStatus::NeedsCooling => Tone::Info,
                ZoneStatus::NeedsHeating => Tone::Warning,
            };
            Row::new(vec![
                Cell::from(zone.name),
                Cell::from(format!("{:.1}°C", zone.current_temp)),
                Cell::from(format!("{:.1}°C", zone.target_temp)),
                Cell::from(zone.seat_count.to_string()),
                Cell::from(zone.air_flow.label()),
                Cell::from(status.label()).style(theme.tone(tone)),
            ])
        })
        .collect();
    let zones = Table::new(
        zone_rows,
        [
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Ζώνη", "Τώρα", "Στόχος", "Θέσεις", "Ροή", "Κατάσταση"])
            .style(theme.text_highlight()),
    )
    .style(theme.text())
    .block(section_block("Ζώνες", theme));
    frame.render_widget(zones, zones_area);

    let schedule: Vec<Line> = climate
        .schedule
        .iter()
        .flat_map(|item| {
            [
                Line::from(vec![
                    Span::styled(format!("{} ", item.time), theme.text_highlight()),
                    Span::styled(item.action, theme.text()),
                    Span::styled(format!(" → {:.1}°C", item.target_temp), theme.info()),
                ]),
                Line::styled(format!("   {}", item.note), theme.text_muted()),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(schedule)
            .scroll((app.state.scroll, 0))
            .block(section_block("Πρόγραμμα", theme)),
        schedule_area,
    );
}
