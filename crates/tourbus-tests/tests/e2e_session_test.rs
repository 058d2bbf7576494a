//! End-to-end session tests for the Smart Tourist Bus console
//!
//! These tests drive the console the way an operator would, through key
//! presses, and check what the session authority and the views agree on.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tourbus_core::cafe::{CheckoutStep, PaymentMethod};
use tourbus_core::{
    error::INVALID_CREDENTIALS_MESSAGE, shortcuts_for, Destination, Role, Session,
    SessionAuthority,
};
use tourbus_tui::app::{Screen, ThemeChoice, TuiConfig};
use tourbus_tui::App;

fn seeded_config(seed: u64) -> TuiConfig {
    TuiConfig {
        seed: Some(seed),
        ..TuiConfig::default()
    }
}

/// Start a console and get past the splash screen
fn start(authority: &SessionAuthority) -> App {
    let mut app = App::new(seeded_config(42), authority.clone());
    assert_eq!(app.current_screen(), Screen::Splash);
    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.current_screen(), Screen::Home);
    app
}

fn press_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

fn login(app: &mut App, username: &str, password: &str) {
    app.handle_key(KeyCode::Char('l'));
    assert_eq!(app.current_screen(), Screen::Login);
    press_text(app, username);
    app.handle_key(KeyCode::Tab);
    press_text(app, password);
    app.handle_key(KeyCode::Enter);
}

/// A driver's shift from login to the console going away on logout
#[test]
fn test_driver_shift() {
    let authority = SessionAuthority::default();
    let mut app = start(&authority);

    // ==========================================
    // STEP 1: Guest sees no shortcuts
    // ==========================================
    assert_eq!(app.role(), Role::Guest);
    assert!(app.shortcuts().is_empty());

    // ==========================================
    // STEP 2: A typo keeps the guest out
    // ==========================================
    login(&mut app, "driver", "driver12");
    assert_eq!(app.current_screen(), Screen::Login);
    assert_eq!(
        app.state.login.error.as_deref(),
        Some(INVALID_CREDENTIALS_MESSAGE)
    );
    assert_eq!(authority.session(), Session::Guest);

    // Fix the password in place
    app.handle_key(KeyCode::Char('3'));
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.current_screen(), Screen::Home);
    assert_eq!(authority.role(), Role::Driver);
    assert_eq!(authority.username().as_deref(), Some("driver"));

    // ==========================================
    // STEP 3: Console, then assistance from the console
    // ==========================================
    app.handle_key(KeyCode::Enter);
    assert_eq!(
        app.current_screen(),
        Screen::Dashboard(Destination::DriverConsole)
    );

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.telemetry.driver.fatigue, 0.0);

    app.handle_key(KeyCode::Char('a'));
    assert_eq!(
        app.current_screen(),
        Screen::Dashboard(Destination::DriverAssistance)
    );
    assert_eq!(
        app.router.breadcrumb(),
        vec!["Αρχική", "Κονσόλα Οδηγού", "Υποβοήθηση Οδηγού"]
    );

    // ==========================================
    // STEP 4: Session ends elsewhere, dashboard closes
    // ==========================================
    authority.logout();
    app.update(Instant::now());

    assert_eq!(app.current_screen(), Screen::Home);
    assert_eq!(app.role(), Role::Guest);
    assert!(!app.router.can_go_back());
}

/// Help opened over a dashboard must not lead back to it after logout
#[test]
fn test_logout_clears_dashboard_from_history() {
    let authority = SessionAuthority::default();
    let mut app = start(&authority);
    login(&mut app, "driver", "driver123");
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Char('?'));
    assert_eq!(app.current_screen(), Screen::Help);

    authority.logout();
    app.update(Instant::now());
    app.handle_key(KeyCode::Esc);

    assert_eq!(app.current_screen(), Screen::Home);
    assert_eq!(app.router.breadcrumb(), vec!["Αρχική"]);
}

/// A passenger orders a coffee without ever logging in
#[test]
fn test_guest_cafe_order() {
    let authority = SessionAuthority::default();
    let mut app = start(&authority);

    app.handle_key(KeyCode::Char('c'));
    assert_eq!(app.current_screen(), Screen::Cafe);
    assert_eq!(app.router.breadcrumb(), vec!["Αρχική", "Καφέ & Σνακ"]);

    // Espresso twice, one removed again, then a snack
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Char('-'));
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Enter);
    let cart = app.cafe.cart();
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total_cents(), cart.subtotal_cents() + 50);

    app.handle_key(KeyCode::Char('o'));
    press_text(&mut app, "Νίκος");
    app.handle_key(KeyCode::Tab);
    press_text(&mut app, "4A");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.cafe.step(), CheckoutStep::Success);
    assert_eq!(app.cafe.details.payment, PaymentMethod::Card);
    let number = app.cafe.order_number().unwrap_or_default();
    assert!(number.starts_with('#'));
    assert_eq!(authority.role(), Role::Guest);

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.cafe.step(), CheckoutStep::Basket);
    assert!(app.cafe.cart().is_empty());
    assert!(app.cafe.details.customer_name.is_empty());
}

/// Same seed, same order number
#[test]
fn test_seeded_order_numbers_match() {
    let place = || {
        let mut app = start(&SessionAuthority::default());
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Enter);
        app.cafe.order_number().map(str::to_owned)
    };
    let first = place();
    assert!(first.is_some());
    assert_eq!(first, place());
}

/// Two consoles on one authority always agree on the session
#[test]
fn test_views_share_session() {
    let authority = SessionAuthority::default();
    let mut cabin = start(&authority);
    let mut cockpit = start(&authority);

    login(&mut cabin, "  employee ", "employee123");
    cockpit.update(Instant::now());

    assert_eq!(cabin.role(), Role::Employee);
    assert_eq!(cockpit.role(), Role::Employee);
    assert_eq!(cockpit.username().as_deref(), Some("employee"));
    assert_eq!(cockpit.shortcuts(), shortcuts_for(Role::Employee));

    cockpit.handle_key(KeyCode::Char('l'));
    cabin.update(Instant::now());

    assert_eq!(cabin.role(), Role::Guest);
    assert!(cabin.shortcuts().is_empty());
}

/// Switching accounts replaces the role rather than merging it
#[test]
fn test_account_switch() {
    let authority = SessionAuthority::default();
    let mut app = start(&authority);

    login(&mut app, "admin", "admin123");
    assert_eq!(app.shortcuts().len(), 5);
    assert!(app.open_dashboard(Destination::RobotVacuum));
    app.handle_key(KeyCode::Esc);

    app.handle_key(KeyCode::Char('l'));
    login(&mut app, "driver", "driver123");

    assert_eq!(app.role(), Role::Driver);
    assert!(!app.open_dashboard(Destination::RobotVacuum));
    assert!(app.open_dashboard(Destination::ClimateControl));
}

/// Every admin shortcut opens its dashboard and returns home
#[test]
fn test_admin_visits_every_card() {
    let authority = SessionAuthority::default();
    let mut app = start(&authority);
    login(&mut app, "admin", "admin123");

    let cards = shortcuts_for(Role::Admin);
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(app.state.home_index, i);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.current_screen(), Screen::Dashboard(card.destination));
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), Screen::Home);
        app.handle_key(KeyCode::Down);
    }
}

/// Same seed, same ticks, same telemetry
#[test]
fn test_seeded_telemetry_is_reproducible() {
    let first_authority = SessionAuthority::default();
    let second_authority = SessionAuthority::default();
    let mut first = App::new(seeded_config(7), first_authority);
    let mut second = App::new(seeded_config(7), second_authority);

    let later = Instant::now() + Duration::from_millis(3_500);
    first.update(later);
    second.update(later);

    assert_eq!(
        first.telemetry.driver.speed_kmh,
        second.telemetry.driver.speed_kmh
    );
    assert_eq!(first.telemetry.driver.lane, second.telemetry.driver.lane);
    assert_eq!(first.telemetry.energy.solar_w, second.telemetry.energy.solar_w);
    assert_eq!(
        first.telemetry.vacuum.progress,
        second.telemetry.vacuum.progress
    );
}

/// Config written to disk drives the next console
#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tourbus").join("config.toml");

    let config = TuiConfig {
        theme: ThemeChoice::HighContrast,
        robot_interval_ms: 1_000,
        seed: Some(3),
        ..TuiConfig::default()
    };
    config.save_to(&path).unwrap();

    let (loaded, error) = TuiConfig::load_or_default(Some(&path));
    assert!(error.is_none());
    assert_eq!(loaded, config);

    let mut app = App::new(loaded, SessionAuthority::default());
    app.update(Instant::now() + Duration::from_millis(2_100));
    // Two robot ticks of two percent each
    assert_eq!(app.telemetry.vacuum.progress, 72);
}

/// A broken config file falls back to defaults and reports why
#[test]
fn test_broken_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();

    let (config, error) = TuiConfig::load_or_default(Some(&path));
    assert_eq!(config, TuiConfig::default());
    assert!(error.is_some());
}
