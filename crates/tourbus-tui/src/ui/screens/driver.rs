//! Driver console dashboard

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tourbus_core::telemetry::driver::{EnergyLevel, SpeedStatus};

use super::field;
use crate::app::App;
use crate::ui::components::progress::ProgressBar;
use crate::ui::layout::{rows, section_block, two_column_layout};
use crate::ui::Tone;

/// Draw the driver console
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let console = &app.telemetry.driver;

    let (left, right) = two_column_layout(area, 50);

    // Driving
    let left_rows = rows(left, &[7, 5]);
    let block = section_block("Οδήγηση", theme);
    let inner = block.inner(left_rows[0]);
    frame.render_widget(block, left_rows[0]);

    let speed_tone = match console.speed_status() {
        SpeedStatus::Safe => Tone::Good,
        SpeedStatus::Warning => Tone::Warning,
        SpeedStatus::Danger => Tone::Danger,
    };
    let driving = rows(inner, &[1, 1, 1, 1]);
    ProgressBar::new(
        console.speed_ratio(),
        format!("Ταχύτητα {:.0} km/h", console.speed_kmh),
    )
    .hide_percent()
    .tone(speed_tone)
    .render(frame, driving[0], theme);

    let lane_style = if console.lane_off_center() {
        theme.warning()
    } else {
        theme.text()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Λωρίδα: ", theme.text_muted()),
            Span::styled(console.lane.label(), lane_style),
        ])),
        driving[1],
    );

    let fatigue_tone = if console.fatigue > 70.0 {
        Tone::Danger
    } else if console.fatigue > 40.0 {
        Tone::Warning
    } else {
        Tone::Good
    };
    ProgressBar::from_percent(console.fatigue, "Κόπωση")
        .tone(fatigue_tone)
        .render(frame, driving[2], theme);

    if console.should_warn() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "⚠ Προσοχή: έλεγξε ταχύτητα και θέση στη λωρίδα",
                theme.danger(),
            )),
            driving[3],
        );
    }

    // Passengers
    let exiting = if console.passengers_exiting {
        ("Αποβίβαση σε εξέλιξη", theme.warning())
    } else {
        ("Όλοι στις θέσεις τους", theme.success())
    };
    let mut passenger_lines = vec![Line::from(vec![
        Span::styled("Επιβάτες: ", theme.text_muted()),
        Span::styled(exiting.0, exiting.1),
    ])];
    match &console.found_item {
        Some(item) => passenger_lines.push(Line::styled(
            format!("Βρέθηκε αντικείμενο: {} [x]", item),
            theme.info(),
        )),
        None => passenger_lines.push(Line::styled("Κανένα ξεχασμένο αντικείμενο", theme.text_muted())),
    }
    frame.render_widget(
        Paragraph::new(passenger_lines).block(section_block("Καμπίνα", theme)),
        left_rows[1],
    );

    // Climate and robot
    let right_rows = rows(right, &[8, 5]);
    let energy_tone = match console.energy_level() {
        EnergyLevel::Normal => theme.success(),
        EnergyLevel::Elevated => theme.warning(),
        EnergyLevel::High => theme.danger(),
    };
    let climate = Paragraph::new(vec![
        field(
            "Λειτουργία",
            format!(
                "{} ({})",
                console.climate_mode.label(),
                if console.climate_auto { "Auto" } else { "Χειροκίνητα" }
            ),
            theme,
        ),
        field("Στόχος", format!("{:.1}°C", console.target_temp), theme),
        field("Καμπίνα", format!("{:.1}°C", console.cabin_temp), theme),
        field("Εξωτερική", format!("{:.1}°C", console.outside_temp), theme),
        Line::from(vec![
            Span::styled("Κατανάλωση: ", theme.text_muted()),
            Span::styled(format!("{:.0}%", console.energy_consumption()), energy_tone),
        ]),
    ])
    .block(section_block("Κλίμα", theme));
    frame.render_widget(climate, right_rows[0]);

    let block = section_block("Ρομπότ καθαρισμού", theme);
    let inner = block.inner(right_rows[1]);
    frame.render_widget(block, right_rows[1]);
    let robot_rows = rows(inner, &[1]);
    frame.render_widget(
        Paragraph::new(if console.robot_active {
            Line::styled("● Σε λειτουργία", theme.success())
        } else {
            Line::styled("○ Ανενεργό", theme.text_muted())
        }),
        robot_rows[0],
    );
    ProgressBar::from_percent(f64::from(console.robot_progress), "Πρόοδος")
        .render(frame, robot_rows[1], theme);
}
