//! Property-based tests for tourbus-core using proptest
//!
//! These tests check the session and content invariants across arbitrary
//! login attempts and telemetry runs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tourbus_core::{
    shortcuts_for,
    telemetry::{driver::DriverConsole, energy::EnergyStation, Simulation},
    AuthError, CredentialTable, Role, Session, SessionAuthority,
};

// ============================================
// Strategies
// ============================================

fn arb_known_account() -> impl Strategy<Value = (&'static str, &'static str, Role)> {
    prop_oneof![
        Just(("admin", "admin123", Role::Admin)),
        Just(("driver", "driver123", Role::Driver)),
        Just(("employee", "employee123", Role::Employee)),
    ]
}

fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

fn arb_attempt() -> impl Strategy<Value = (String, String)> {
    ("[a-zA-Z0-9 ]{0,16}", "[a-zA-Z0-9 ]{0,16}")
}

fn builtin_match(username: &str, password: &str) -> bool {
    CredentialTable::builtin()
        .iter()
        .any(|c| c.username == username.trim() && c.password == password)
}

// ============================================
// Property Tests
// ============================================

proptest! {
    // ----------------------------------------
    // Login
    // ----------------------------------------

    #[test]
    fn surrounding_whitespace_on_username_is_ignored(
        (username, password, role) in arb_known_account(),
        left in arb_padding(),
        right in arb_padding(),
    ) {
        let authority = SessionAuthority::default();
        let padded = format!("{left}{username}{right}");
        let session = authority.login(&padded, password).unwrap();

        prop_assert_eq!(session.role(), role);
        let current = authority.username();
        prop_assert_eq!(current.as_deref(), Some(username));
    }

    #[test]
    fn padded_password_is_rejected(
        (username, password, _role) in arb_known_account(),
        pad in "[ \t]{1,3}",
    ) {
        let authority = SessionAuthority::default();
        let padded = format!("{password}{pad}");
        prop_assert_eq!(authority.login(username, &padded), Err(AuthError::InvalidCredentials));
        prop_assert_eq!(authority.role(), Role::Guest);
    }

    #[test]
    fn failed_login_leaves_session_unchanged(
        (username, password, _role) in arb_known_account(),
        (bad_user, bad_pass) in arb_attempt(),
    ) {
        prop_assume!(!builtin_match(&bad_user, &bad_pass));

        let authority = SessionAuthority::default();
        authority.login(username, password).unwrap();
        let before = authority.session();

        prop_assert!(authority.login(&bad_user, &bad_pass).is_err());
        prop_assert_eq!(authority.session(), before);
    }

    #[test]
    fn arbitrary_attempt_matches_table(
        (username, password) in arb_attempt(),
    ) {
        let authority = SessionAuthority::default();
        let result = authority.login(&username, &password);

        prop_assert_eq!(result.is_ok(), builtin_match(&username, &password));
        match result {
            Ok(session) => prop_assert!(session.is_authenticated()),
            Err(err) => {
                prop_assert_eq!(err, AuthError::InvalidCredentials);
                prop_assert_eq!(authority.session(), Session::Guest);
            }
        }
    }

    #[test]
    fn guest_iff_no_username(
        steps in prop::collection::vec((arb_known_account(), any::<bool>()), 0..12),
    ) {
        let authority = SessionAuthority::default();
        for ((username, password, _), logout) in steps {
            if logout {
                authority.logout();
            } else {
                authority.login(username, password).unwrap();
            }
            prop_assert_eq!(authority.role() == Role::Guest, authority.username().is_none());
        }
    }

    // ----------------------------------------
    // Content
    // ----------------------------------------

    #[test]
    fn shortcuts_follow_role(
        (username, password, role) in arb_known_account(),
    ) {
        let authority = SessionAuthority::default();
        authority.login(username, password).unwrap();
        let cards = shortcuts_for(authority.role());

        prop_assert!(!cards.is_empty());
        prop_assert_eq!(cards, shortcuts_for(role));

        authority.logout();
        prop_assert!(shortcuts_for(authority.role()).is_empty());
    }

    // ----------------------------------------
    // Telemetry
    // ----------------------------------------

    #[test]
    fn driver_console_stays_bounded(seed in any::<u64>(), ticks in 1usize..300) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut console = DriverConsole::new();
        for _ in 0..ticks {
            console.step(&mut rng);
        }
        prop_assert!((0.0..=120.0).contains(&console.speed_kmh));
        prop_assert!((0.0..=100.0).contains(&console.fatigue));
    }

    #[test]
    fn energy_station_stays_bounded(seed in any::<u64>(), ticks in 1usize..300) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut station = EnergyStation::new();
        for _ in 0..ticks {
            station.step(&mut rng);
        }
        prop_assert!((0.0..=800.0).contains(&station.solar_w));
        prop_assert!((100.0..=600.0).contains(&station.consumption_w));
        prop_assert!((0.0..=100.0).contains(&station.battery_percent));
        prop_assert!(station.stored_wh() <= 5000);
    }
}
