//! Energy station dashboard

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tourbus_core::telemetry::energy::{
    battery_packs, charge_schedule, energy_alerts, AlertSeverity, PackStatus, RoofStatus,
};

use super::field;
use crate::app::App;
use crate::ui::components::progress::{bar, ProgressBar};
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::Tone;

/// Draw the energy station
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let energy = &app.telemetry.energy;
    let sections = rows(area, &[7, 8]);

    // Power balance
    let (balance_area, battery_area) = two_column_layout(sections[0], 50);
    let net = energy.net_w();
    let net_style = if energy.is_charging() {
        theme.success()
    } else {
        theme.warning()
    };
    let balance = Paragraph::new(vec![
        field("Ηλιακή παραγωγή", format!("{:.0} W", energy.solar_w), theme),
        field("Κατανάλωση", format!("{:.0} W", energy.consumption_w), theme),
        Line::from(vec![
            Span::styled("Ισοζύγιο: ", theme.text_muted()),
            Span::styled(format!("{:+.0} W", net), net_style),
        ]),
        field("Καιρός", energy.weather.label(), theme),
        field("Απόδοση πάνελ", format!("{:.0}%", energy.solar_efficiency()), theme),
    ])
    .block(section_block("Ισοζύγιο ισχύος", theme));
    frame.render_widget(balance, balance_area);

    let block = section_block("Μπαταρία", theme);
    let inner = block.inner(battery_area);
    frame.render_widget(block, battery_area);
    let battery_rows = rows(inner, &[1, 1, 1]);
    let battery_tone = if energy.battery_percent < 20.0 {
        Tone::Danger
    } else if energy.battery_percent < 40.0 {
        Tone::Warning
    } else {
        Tone::Good
    };
    ProgressBar::from_percent(energy.battery_percent, "Φορτίο")
        .tone(battery_tone)
        .render(frame, battery_rows[0], theme);
    let remaining = energy.minutes_remaining();
    let remaining_label = if energy.is_charging() {
        "Έως πλήρη φόρτιση"
    } else {
        "Αυτονομία"
    };
    frame.render_widget(
        Paragraph::new(field(
            remaining_label,
            format!("{}h {:02}m", (remaining / 60.0) as u32, (remaining % 60.0) as u32),
            theme,
        )),
        battery_rows[1],
    );
    frame.render_widget(
        Paragraph::new(field("Αποθηκευμένη", format!("{} Wh", energy.stored_wh()), theme)),
        battery_rows[2],
    );

    // Roof and loads
    let (roof_area, loads_area) = two_column_layout(sections[1], 50);
    let roof_style = if energy.roof_optimal() {
        theme.success()
    } else {
        theme.warning()
    };
    let lock = if energy.roof_locked { "Κλειδωμένη" } else { "Ξεκλείδωτη" };
    let panels: String = energy
        .panel_levels()
        .iter()
        .map(|level| match *level as u32 {
            0..=39 => '▁',
            40..=69 => '▄',
            _ => '█',
        })
        .collect();
    let roof_hint = match (energy.roof, energy.roof_optimal()) {
        (_, true) => "Βέλτιστη θέση για τον καιρό",
        (RoofStatus::Open, false) => "Συνιστάται κλείσιμο",
        (RoofStatus::Closed, false) => "Συνιστάται άνοιγμα",
    };
    let roof = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Οροφή: ", theme.text_muted()),
            Span::styled(energy.roof.label(), roof_style),
            Span::styled(format!("  ({})", lock), theme.text_secondary()),
        ]),
        Line::styled(roof_hint, roof_style),
        Line::raw(""),
        Line::styled("Ηλιακά πάνελ", theme.text_muted()),
        Line::styled(panels, theme.info()),
    ])
    .block(section_block("Οροφή & πάνελ", theme));
    frame.render_widget(roof, roof_area);

    let loads = energy.loads();
    let ac = if energy.ac_enabled { "Ενεργό" } else { "Ανενεργό" };
    let loads_widget = Paragraph::new(vec![
        field("Κλιματισμός", format!("{} · {} W", ac, loads.ac_w), theme),
        field(
            "Φωτισμός",
            format!("{} {}% · {} W", bar(f64::from(energy.lights_level), 10), energy.lights_level, loads.lights_w),
            theme,
        ),
        field("Συστήματα", format!("{} W", loads.systems_w), theme),
        Line::from(vec![
            Span::styled("Εξοικονόμηση: ", theme.text_muted()),
            Span::styled(format!("{} W", loads.saved_w), theme.success()),
        ]),
    ])
    .block(section_block("Φορτία", theme));
    frame.render_widget(loads_widget, loads_area);

    // Packs, alerts and schedule
    let mut lines = Vec::new();
    for pack in battery_packs() {
        let tone = match pack.status {
            PackStatus::Normal => Tone::Good,
            PackStatus::Charging => Tone::Info,
            PackStatus::Warning => Tone::Warning,
            PackStatus::Critical => Tone::Danger,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", pack.name), theme.text()),
            Span::styled(format!("({}) ", pack.location), theme.text_muted()),
            Span::styled(
                format!(
                    "SoC {}% · SoH {}% · {:.1}°C · {} V · {} κύκλοι ",
                    pack.soc_percent, pack.health_percent, pack.temperature_c, pack.voltage, pack.cycle_count
                ),
                theme.text_secondary(),
            ),
            Span::styled(pack.status_label, theme.tone(tone)),
        ]));
    }
    lines.push(Line::raw(""));
    for alert in energy_alerts() {
        let style = match alert.severity {
            AlertSeverity::Info => theme.info(),
            AlertSeverity::Warning => theme.warning(),
            AlertSeverity::Critical => theme.danger(),
        };
        lines.push(Line::from(vec![
            Span::styled("● ", style),
            Span::styled(alert.title, theme.text()),
            Span::styled(format!(" - {} ", alert.description), theme.text_secondary()),
            Span::styled(alert.time, theme.text_muted()),
        ]));
    }
    lines.push(Line::raw(""));
    for window in charge_schedule() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", window.window), theme.text_highlight()),
            Span::styled(
                format!("→ {}% @ {} ", window.target_soc, window.location),
                theme.text(),
            ),
            Span::styled(window.note, theme.text_muted()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((app.state.scroll, 0))
            .block(section_block("Πακέτα, ειδοποιήσεις & φόρτιση", theme)),
        sections[2],
    );
}
