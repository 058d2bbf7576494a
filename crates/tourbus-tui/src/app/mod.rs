//! Application state and event handling

pub mod config;
pub mod router;
mod state;
pub mod timers;

pub use config::{ConfigError, ThemeChoice, TuiConfig};
pub use router::Router;
pub use state::{AppState, CafeField, CafeView, LoginField, LoginForm, Screen, MAX_INPUT_LEN};

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use tokio::sync::watch;
use tourbus_core::telemetry::{
    climate::ClimateControl, driver::DriverConsole, energy::EnergyStation, energy::RoofStatus,
    vacuum::RobotVacuum, Simulation,
};
use tourbus_core::cafe::{format_price, CheckoutStep};
use tourbus_core::{
    allows, shortcuts_for, CafeError, CafeOrder, Destination, Role, Session, SessionAuthority,
    Shortcut,
};

use crate::ui::{
    self,
    components::notification::{Notification, NotificationManager},
    Theme,
};
use state::push_limited;
use timers::SimulationTimers;

/// Application result type
pub type AppResult<T> = anyhow::Result<T>;

const TARGET_TEMP_STEP: f64 = 0.5;
const LIGHTS_STEP: i16 = 10;

const INPUT_FULL_MESSAGE: &str = "Το πεδίο είναι γεμάτο.";

/// Live models behind the staff dashboards
#[derive(Debug, Default)]
pub struct Telemetry {
    pub driver: DriverConsole,
    pub energy: EnergyStation,
    pub climate: ClimateControl,
    pub vacuum: RobotVacuum,
}

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    pub router: Router,

    pub theme: Theme,

    pub config: TuiConfig,

    pub telemetry: Telemetry,

    /// Passenger order in progress
    pub cafe: CafeOrder,

    pub notifications: NotificationManager,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    authority: SessionAuthority,

    session: watch::Receiver<Session>,

    rng: StdRng,

    timers: SimulationTimers,

    /// Last tick time
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TuiConfig, authority: SessionAuthority) -> Self {
        let now = Instant::now();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let theme = match config.theme {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::HighContrast => Theme::high_contrast(),
        };
        let mut router = Router::new();
        router.push(Screen::Splash);

        Self {
            state: AppState::new(),
            router,
            theme,
            timers: SimulationTimers::from_config(&config, now),
            config,
            telemetry: Telemetry::default(),
            cafe: CafeOrder::new(),
            notifications: NotificationManager::new(),
            should_quit: false,
            tick: 0,
            session: authority.subscribe(),
            authority,
            rng,
            last_tick: now,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let tick_rate = self.config.tick_rate();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.last_tick.elapsed() >= tick_rate {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
                self.notifications.tick();
            }
            self.update(Instant::now());
        }

        Ok(())
    }

    /// Current role, as last seen by this view
    pub fn role(&self) -> Role {
        self.session.borrow().role()
    }

    pub fn username(&self) -> Option<String> {
        self.session.borrow().username().map(str::to_owned)
    }

    /// Shortcut cards visible right now
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        shortcuts_for(self.role())
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current_screen
    }

    /// Advance timers and react to session changes
    pub fn update(&mut self, now: Instant) {
        for _ in 0..self.timers.driver.poll(now) {
            self.telemetry.driver.step(&mut self.rng);
        }
        for _ in 0..self.timers.energy.poll(now) {
            self.telemetry.energy.step(&mut self.rng);
        }
        for _ in 0..self.timers.robot.poll(now) {
            self.telemetry.driver.advance_robot();
            self.telemetry.vacuum.advance();
        }

        self.sync_session();
    }

    /// Pick up a session change made anywhere through the authority
    fn sync_session(&mut self) {
        if !self.session.has_changed().unwrap_or(false) {
            return;
        }
        let role = self.session.borrow_and_update().role();
        tracing::debug!(%role, "Session changed");

        self.state.clamp_home_index(shortcuts_for(role).len());

        // A closed dashboard must not stay reachable through Esc either
        let locked_out = self.router.screens().any(|screen| {
            matches!(screen, Screen::Dashboard(destination) if !allows(role, destination))
        });
        if locked_out {
            self.router.reset(Screen::Home);
            self.state.current_screen = Screen::Home;
            self.state.scroll = 0;
            self.notifications
                .push(Notification::warning("Η πρόσβαση στον πίνακα έκλεισε."));
        }
    }

    /// Warn once per burst of keystrokes into a full field
    fn notify_input_full(&mut self) {
        if !self.notifications.iter().any(|n| n.message == INPUT_FULL_MESSAGE) {
            self.notifications
                .push(Notification::warning(INPUT_FULL_MESSAGE));
        }
    }

    fn navigate(&mut self, screen: Screen) {
        self.router.push(screen);
        self.state.current_screen = screen;
        self.state.scroll = 0;
    }

    fn go_back(&mut self) {
        if let Some(screen) = self.router.back() {
            self.state.current_screen = screen;
            self.state.scroll = 0;
        }
    }

    /// Open a staff dashboard if the current role allows it
    pub fn open_dashboard(&mut self, destination: Destination) -> bool {
        let role = self.role();
        if !allows(role, destination) {
            tracing::warn!(%role, ?destination, "Dashboard refused");
            return false;
        }
        self.navigate(Screen::Dashboard(destination));
        true
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.state.current_screen {
            Screen::Splash => self.handle_splash_key(key),
            Screen::Home => self.handle_home_key(key),
            Screen::Login => self.handle_login_key(key),
            Screen::Help => self.handle_help_key(key),
            Screen::Cafe => self.handle_cafe_key(key),
            Screen::Dashboard(destination) => self.handle_dashboard_key(destination, key),
        }
        self.sync_session();
    }

    fn handle_splash_key(&mut self, _key: KeyCode) {
        self.router.reset(Screen::Home);
        self.state.current_screen = Screen::Home;
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        let cards = self.shortcuts();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.home_index = self.state.home_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.home_index + 1 < cards.len() {
                    self.state.home_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(card) = cards.get(self.state.home_index) {
                    self.open_dashboard(card.destination);
                }
            }
            KeyCode::Char('?') => self.navigate(Screen::Help),
            KeyCode::Char('c') => self.navigate(Screen::Cafe),
            KeyCode::Char('l') => {
                if self.authority.is_authenticated() {
                    self.authority.logout();
                    self.notifications
                        .push(Notification::info("Αποσυνδέθηκες. Λειτουργία επισκέπτη."));
                } else {
                    self.state.login.clear();
                    self.navigate(Screen::Login);
                }
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.state.login.focus = self.state.login.focus.toggled();
            }
            KeyCode::Enter => match self.state.login.focus {
                LoginField::Username => self.state.login.focus = LoginField::Password,
                LoginField::Password => self.submit_login(),
            },
            KeyCode::Backspace => self.state.login.pop(),
            KeyCode::Char(c) => {
                if !self.state.login.push(c) {
                    self.notify_input_full();
                }
            }
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let form = &self.state.login;
        match self.authority.login(&form.username, &form.password) {
            Ok(session) => {
                self.state.login.clear();
                self.state.home_index = 0;
                self.notifications.push(Notification::success(format!(
                    "Συνδέθηκες ως {}.",
                    session.role().label()
                )));
                self.go_back();
            }
            Err(err) => {
                self.state.login.error = Some(err.message().to_string());
            }
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => self.go_back(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.scroll = self.state.scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn handle_cafe_key(&mut self, key: KeyCode) {
        match self.cafe.step() {
            CheckoutStep::Basket => self.handle_basket_key(key),
            CheckoutStep::Checkout => self.handle_checkout_key(key),
            CheckoutStep::Success => match key {
                KeyCode::Enter => self.cafe.reset(),
                KeyCode::Esc => {
                    self.cafe.reset();
                    self.go_back();
                }
                _ => {}
            },
        }
    }

    fn handle_basket_key(&mut self, key: KeyCode) {
        let view = &mut self.state.cafe;
        match key {
            KeyCode::Esc => self.go_back(),
            KeyCode::Left | KeyCode::Char('h') => view.shift_category(false),
            KeyCode::Right | KeyCode::Char('l') => view.shift_category(true),
            KeyCode::Up | KeyCode::Char('k') => view.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => view.select_next(),
            KeyCode::Enter | KeyCode::Char('+') => {
                if let Some(item) = view.selected() {
                    self.cafe.add(item);
                }
            }
            KeyCode::Char('-') => {
                if let Some(item) = view.selected() {
                    self.cafe.remove(item.id);
                }
            }
            KeyCode::Char('o') => match self.cafe.proceed_to_checkout() {
                Ok(()) => view.field = CafeField::Name,
                Err(err) => self.notifications.push(Notification::warning(err.to_string())),
            },
            _ => {}
        }
    }

    fn handle_checkout_key(&mut self, key: KeyCode) {
        let field = self.state.cafe.field;
        match key {
            KeyCode::Esc => {
                if let Err(err) = self.cafe.back_to_basket() {
                    tracing::warn!(%err, "Cafe back refused");
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.cafe.field = field.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.cafe.field = field.prev(),
            KeyCode::Enter => self.submit_cafe_order(),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if field == CafeField::Payment => {
                let details = &mut self.cafe.details;
                details.payment = details.payment.toggled();
            }
            KeyCode::Backspace => {
                if let Some(text) = self.cafe_text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                let rejected = self
                    .cafe_text_mut(field)
                    .is_some_and(|text| !push_limited(text, c));
                if rejected {
                    self.notify_input_full();
                }
            }
            _ => {}
        }
    }

    fn cafe_text_mut(&mut self, field: CafeField) -> Option<&mut String> {
        let details = &mut self.cafe.details;
        match field {
            CafeField::Name => Some(&mut details.customer_name),
            CafeField::Seat => Some(&mut details.seat_number),
            CafeField::Notes => Some(&mut details.notes),
            CafeField::Payment => None,
        }
    }

    fn submit_cafe_order(&mut self) {
        let total = format_price(self.cafe.cart().total_cents());
        match self.cafe.place_order(&mut self.rng) {
            Ok(number) => {
                let message = format!("Παραγγελία {number} · {total}");
                self.notifications.push(Notification::success(message));
            }
            Err(err @ CafeError::EmptyCart) => {
                self.notifications.push(Notification::warning(err.to_string()));
            }
            Err(err) => tracing::warn!(%err, "Cafe order refused"),
        }
    }

    fn handle_dashboard_key(&mut self, destination: Destination, key: KeyCode) {
        match key {
            KeyCode::Esc => return self.go_back(),
            KeyCode::Char('?') => return self.navigate(Screen::Help),
            KeyCode::Up => {
                self.state.scroll = self.state.scroll.saturating_sub(1);
                return;
            }
            KeyCode::Down => {
                self.state.scroll = self.state.scroll.saturating_add(1);
                return;
            }
            _ => {}
        }

        match destination {
            Destination::DriverConsole => self.handle_driver_key(key),
            Destination::ClimateControl => self.handle_climate_key(key),
            Destination::EnergyStation => self.handle_energy_key(key),
            Destination::RobotVacuum => self.handle_vacuum_key(key),
            Destination::DriverAssistance | Destination::CrewControl => {}
        }
    }

    fn handle_driver_key(&mut self, key: KeyCode) {
        let driver = &mut self.telemetry.driver;
        match key {
            KeyCode::Char('a') => {
                self.open_dashboard(Destination::DriverAssistance);
            }
            KeyCode::Char('p') => driver.toggle_passengers_exiting(),
            KeyCode::Char('r') => {
                driver.take_break();
                self.notifications
                    .push(Notification::success("Καλό διάλειμμα! Η κόπωση μηδενίστηκε."));
            }
            KeyCode::Char('c') => driver.toggle_climate_auto(),
            KeyCode::Char('m') => driver.set_climate_mode(driver.climate_mode.toggled()),
            KeyCode::Char('+') | KeyCode::Right => driver.adjust_target_temp(TARGET_TEMP_STEP),
            KeyCode::Char('-') | KeyCode::Left => driver.adjust_target_temp(-TARGET_TEMP_STEP),
            KeyCode::Char('v') => driver.toggle_robot(),
            KeyCode::Char('x') => driver.dismiss_found_item(),
            _ => {}
        }
    }

    fn handle_climate_key(&mut self, key: KeyCode) {
        let climate = &mut self.telemetry.climate;
        match key {
            KeyCode::Char('p') => climate.toggle_power(),
            KeyCode::Char('m') => climate.cycle_mode(),
            KeyCode::Char('f') => climate.cycle_fan(),
            _ => {}
        }
    }

    fn handle_energy_key(&mut self, key: KeyCode) {
        let energy = &mut self.telemetry.energy;
        match key {
            KeyCode::Char('o') | KeyCode::Char('c') => {
                let status = if key == KeyCode::Char('o') {
                    RoofStatus::Open
                } else {
                    RoofStatus::Closed
                };
                if !energy.set_roof(status) {
                    self.notifications
                        .push(Notification::warning("Η οροφή είναι κλειδωμένη."));
                }
            }
            KeyCode::Char('l') => energy.toggle_roof_lock(),
            KeyCode::Char('a') => energy.toggle_ac(),
            KeyCode::Char('w') => energy.toggle_weather(),
            KeyCode::Char('+') | KeyCode::Right => energy.adjust_lights(LIGHTS_STEP),
            KeyCode::Char('-') | KeyCode::Left => energy.adjust_lights(-LIGHTS_STEP),
            _ => {}
        }
    }

    fn handle_vacuum_key(&mut self, key: KeyCode) {
        let vacuum = &mut self.telemetry.vacuum;
        match key {
            KeyCode::Char('p') => vacuum.toggle_pause(),
            KeyCode::Char('s') => vacuum.start_cycle(),
            KeyCode::Char('d') => vacuum.return_to_dock(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tourbus_core::error::INVALID_CREDENTIALS_MESSAGE;

    fn app() -> App {
        let config = TuiConfig {
            seed: Some(11),
            ..TuiConfig::default()
        };
        let mut app = App::new(config, SessionAuthority::default());
        app.handle_key(KeyCode::Enter);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn login(app: &mut App, username: &str, password: &str) {
        app.handle_key(KeyCode::Char('l'));
        type_text(app, username);
        app.handle_key(KeyCode::Enter);
        type_text(app, password);
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_splash_then_home_as_guest() {
        let app = app();
        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.role(), Role::Guest);
        assert!(app.shortcuts().is_empty());
    }

    #[test]
    fn test_guest_enter_does_nothing() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[rstest]
    #[case("driver", "driver123", Role::Driver, 2)]
    #[case("  employee  ", "employee123", Role::Employee, 3)]
    #[case("admin", "admin123", Role::Admin, 5)]
    fn test_login_unlocks_shortcuts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] role: Role,
        #[case] cards: usize,
    ) {
        let mut app = app();
        login(&mut app, username, password);

        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.role(), role);
        assert_eq!(app.shortcuts().len(), cards);
        assert!(app.state.login.username.is_empty());
    }

    #[rstest]
    #[case("driver", "Driver123")]
    #[case("ghost", "driver123")]
    #[case("", "")]
    #[case("driver", "driver123 ")]
    fn test_rejected_login_stays_on_form(#[case] username: &str, #[case] password: &str) {
        let mut app = app();
        login(&mut app, username, password);

        assert_eq!(app.current_screen(), Screen::Login);
        assert_eq!(app.role(), Role::Guest);
        assert_eq!(
            app.state.login.error.as_deref(),
            Some(INVALID_CREDENTIALS_MESSAGE)
        );
        assert_eq!(app.state.login.username, username);
    }

    #[test]
    fn test_escape_leaves_login() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn test_logout_toggle() {
        let mut app = app();
        login(&mut app, "driver", "driver123");
        app.handle_key(KeyCode::Char('l'));

        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.role(), Role::Guest);
        assert!(app.username().is_none());
    }

    #[test]
    fn test_open_shortcut_and_back() {
        let mut app = app();
        login(&mut app, "employee", "employee123");
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        assert_eq!(
            app.current_screen(),
            Screen::Dashboard(Destination::EnergyStation)
        );
        assert_eq!(app.router.breadcrumb().last(), Some(&"Ενέργεια Οχήματος"));

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[rstest]
    #[case(Role::Guest, Destination::DriverConsole)]
    #[case(Role::Driver, Destination::EnergyStation)]
    #[case(Role::Employee, Destination::DriverAssistance)]
    fn test_dashboard_refused(#[case] role: Role, #[case] destination: Destination) {
        let mut app = app();
        match role {
            Role::Driver => login(&mut app, "driver", "driver123"),
            Role::Employee => login(&mut app, "employee", "employee123"),
            _ => {}
        }
        assert!(!app.open_dashboard(destination));
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn test_driver_reaches_assistance_from_console() {
        let mut app = app();
        login(&mut app, "driver", "driver123");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('a'));
        assert_eq!(
            app.current_screen(),
            Screen::Dashboard(Destination::DriverAssistance)
        );
    }

    #[test]
    fn test_external_logout_closes_dashboard() {
        let authority = SessionAuthority::default();
        let mut app = App::new(TuiConfig::default(), authority.clone());
        app.handle_key(KeyCode::Enter);
        login(&mut app, "admin", "admin123");
        assert!(app.open_dashboard(Destination::CrewControl));

        authority.logout();
        app.update(Instant::now());

        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.router.depth(), 1);
    }

    #[test]
    fn test_logout_from_help_over_dashboard() {
        let authority = SessionAuthority::default();
        let mut app = App::new(TuiConfig::default(), authority.clone());
        app.handle_key(KeyCode::Enter);
        login(&mut app, "driver", "driver123");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('?'));
        assert_eq!(app.current_screen(), Screen::Help);

        authority.logout();
        app.update(Instant::now());
        app.handle_key(KeyCode::Esc);

        assert_eq!(app.current_screen(), Screen::Home);
        assert!(!app
            .router
            .screens()
            .any(|screen| matches!(screen, Screen::Dashboard(_))));
    }

    #[test]
    fn test_role_switch_keeps_allowed_history() {
        let authority = SessionAuthority::default();
        let mut app = App::new(TuiConfig::default(), authority.clone());
        app.handle_key(KeyCode::Enter);
        login(&mut app, "admin", "admin123");
        assert!(app.open_dashboard(Destination::ClimateControl));
        app.handle_key(KeyCode::Char('?'));

        authority.login("driver", "driver123").unwrap();
        app.update(Instant::now());

        assert_eq!(app.current_screen(), Screen::Help);
        app.handle_key(KeyCode::Esc);
        assert_eq!(
            app.current_screen(),
            Screen::Dashboard(Destination::ClimateControl)
        );
    }

    #[test]
    fn test_full_login_field_warns() {
        let mut app = app();
        app.handle_key(KeyCode::Char('l'));
        type_text(&mut app, &"a".repeat(MAX_INPUT_LEN + 3));

        assert_eq!(app.state.login.username.len(), MAX_INPUT_LEN);
        assert!(app.state.login.is_full());
        let warnings = app
            .notifications
            .iter()
            .filter(|n| n.message == INPUT_FULL_MESSAGE)
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_guest_orders_from_cafe() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.current_screen(), Screen::Cafe);

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('+'));
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.cafe.cart().count(), 3);

        app.handle_key(KeyCode::Char('o'));
        assert_eq!(app.cafe.step(), CheckoutStep::Checkout);
        type_text(&mut app, "Μαρία");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "12B");
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char(' '));

        assert_eq!(app.cafe.details.recipient(), "Μαρία · 12B");
        assert_eq!(
            app.cafe.details.payment,
            tourbus_core::cafe::PaymentMethod::Cash
        );

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.cafe.step(), CheckoutStep::Success);
        assert!(app.cafe.order_number().is_some());

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(app.cafe.cart().is_empty());
    }

    #[test]
    fn test_empty_basket_cannot_check_out() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Char('o'));

        assert_eq!(app.cafe.step(), CheckoutStep::Basket);
        assert!(app
            .notifications
            .iter()
            .any(|n| n.message == "Το καλάθι σου είναι άδειο"));
    }

    #[test]
    fn test_checkout_escape_returns_to_basket() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Esc);

        assert_eq!(app.current_screen(), Screen::Cafe);
        assert_eq!(app.cafe.step(), CheckoutStep::Basket);
        assert_eq!(app.cafe.cart().count(), 1);

        app.handle_key(KeyCode::Char('-'));
        assert!(app.cafe.cart().is_empty());
    }

    #[test]
    fn test_home_index_clamped_after_role_change() {
        let mut app = app();
        login(&mut app, "admin", "admin123");
        for _ in 0..4 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.state.home_index, 4);

        app.handle_key(KeyCode::Char('l'));
        login(&mut app, "driver", "driver123");
        assert!(app.state.home_index < 2);
    }

    #[test]
    fn test_help_follows_role_and_returns() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        assert_eq!(app.current_screen(), Screen::Help);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn test_quit_from_home() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_robot_timer_advances_models() {
        let mut app = app();
        let start = Instant::now();
        app.update(start + app.config.robot_interval());

        assert_eq!(app.telemetry.vacuum.progress, 70);
        // Driver robot starts inactive
        assert_eq!(app.telemetry.driver.robot_progress, 65);
    }

    #[test]
    fn test_driver_timer_moves_fatigue() {
        let mut app = app();
        let before = app.telemetry.driver.fatigue;
        app.update(Instant::now() + app.config.driver_interval());
        assert!(app.telemetry.driver.fatigue >= before);
    }

    #[test]
    fn test_locked_roof_notifies() {
        let mut app = app();
        login(&mut app, "employee", "employee123");
        assert!(app.open_dashboard(Destination::EnergyStation));

        app.handle_key(KeyCode::Char('l'));
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.telemetry.energy.roof, RoofStatus::Open);

        app.handle_key(KeyCode::Char('l'));
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.telemetry.energy.roof, RoofStatus::Closed);
    }

    #[test]
    fn test_climate_keys() {
        let mut app = app();
        login(&mut app, "driver", "driver123");
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.current_screen(),
            Screen::Dashboard(Destination::ClimateControl)
        );

        app.handle_key(KeyCode::Char('p'));
        assert!(!app.telemetry.climate.powered);
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(
            app.telemetry.climate.fan,
            tourbus_core::telemetry::climate::FanLevel::High
        );
    }
}
