//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::{Theme, Tone};

use ratatui::prelude::*;
use tourbus_core::cafe::CheckoutStep;
use tourbus_core::Destination;

use crate::app::{App, Screen};
use components::{header, status_bar};
use layout::ScreenLayout;

/// Main render function: chrome around the current screen, then toasts
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.state.current_screen == Screen::Splash {
        screens::splash::draw(frame, area, app);
        return;
    }

    let layout = ScreenLayout::new(area);
    header::render(frame, layout.header, &app.router.breadcrumb(), &app.theme);

    match app.state.current_screen {
        Screen::Splash => {}
        Screen::Home => screens::home::draw(frame, layout.content, app),
        Screen::Login => screens::login::draw(frame, layout.content, app),
        Screen::Help => screens::help::draw(frame, layout.content, app),
        Screen::Cafe => screens::cafe::draw(frame, layout.content, app),
        Screen::Dashboard(destination) => match destination {
            Destination::DriverConsole => screens::driver::draw(frame, layout.content, app),
            Destination::DriverAssistance => screens::assistance::draw(frame, layout.content, app),
            Destination::ClimateControl => screens::climate::draw(frame, layout.content, app),
            Destination::EnergyStation => screens::energy::draw(frame, layout.content, app),
            Destination::CrewControl => screens::crew::draw(frame, layout.content, app),
            Destination::RobotVacuum => screens::vacuum::draw(frame, layout.content, app),
        },
    }

    let username = app.username();
    let status = status_bar::SessionStatus {
        role: app.role(),
        username: username.as_deref(),
    };
    status_bar::render_status_bar(
        frame,
        layout.footer,
        &status,
        hints(
            app.state.current_screen,
            app.role().is_staff(),
            app.cafe.step(),
        ),
        &app.theme,
    );

    app.notifications.render(frame, layout.content, &app.theme);
}

/// Key hints for the status bar
fn hints(screen: Screen, staff: bool, step: CheckoutStep) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Splash => &[],
        Screen::Home if staff => &[("↑/↓", "Επιλογή"), ("Enter", "Άνοιγμα"), ("c", "Καφέ"), ("l", "Αποσύνδεση"), ("?", "Βοήθεια"), ("q", "Έξοδος")],
        Screen::Home => &[("c", "Καφέ"), ("l", "Σύνδεση"), ("?", "Βοήθεια"), ("q", "Έξοδος")],
        Screen::Login => &[("Tab", "Πεδίο"), ("Enter", "Σύνδεση"), ("Esc", "Πίσω")],
        Screen::Help => &[("↑/↓", "Κύλιση"), ("Esc", "Πίσω")],
        Screen::Cafe => match step {
            CheckoutStep::Basket => &[("←/→", "Κατηγορία"), ("↑/↓", "Επιλογή"), ("Enter/+", "Προσθήκη"), ("-", "Αφαίρεση"), ("o", "Checkout"), ("Esc", "Πίσω")],
            CheckoutStep::Checkout => &[("Tab", "Πεδίο"), ("Space", "Πληρωμή"), ("Enter", "Ολοκλήρωση"), ("Esc", "Καλάθι")],
            CheckoutStep::Success => &[("Enter", "Νέα παραγγελία"), ("Esc", "Πίσω")],
        },
        Screen::Dashboard(Destination::DriverConsole) => &[("p", "Επιβάτες"), ("r", "Διάλειμμα"), ("c", "Auto"), ("m", "Λειτουργία"), ("±", "Θερμ."), ("v", "Ρομπότ"), ("a", "Υποβοήθηση"), ("Esc", "Πίσω")],
        Screen::Dashboard(Destination::ClimateControl) => &[("p", "Ισχύς"), ("m", "Λειτουργία"), ("f", "Ανεμιστήρας"), ("Esc", "Πίσω")],
        Screen::Dashboard(Destination::EnergyStation) => &[("o/c", "Οροφή"), ("l", "Κλείδωμα"), ("a", "AC"), ("w", "Καιρός"), ("±", "Φωτισμός"), ("Esc", "Πίσω")],
        Screen::Dashboard(Destination::RobotVacuum) => &[("p", "Παύση"), ("s", "Έναρξη"), ("d", "Βάση"), ("Esc", "Πίσω")],
        Screen::Dashboard(_) => &[("↑/↓", "Κύλιση"), ("?", "Βοήθεια"), ("Esc", "Πίσω")],
    }
}
