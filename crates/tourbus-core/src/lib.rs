//! Core library for the Smart Tourist Bus console
//!
//! This crate contains everything the console needs that is independent of
//! the terminal: the session authority that gates staff functionality, the
//! role-keyed content tables (shortcut cards, online help), and the simulated
//! telemetry models that feed the dashboards.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Roles, credential table, session state, [`SessionAuthority`] |
//! | [`content`] | Per-role shortcut cards and help bundles |
//! | [`cafe`] | Passenger cafe menu, basket and checkout |
//! | [`telemetry`] | Timer-driven sensor simulations and static dashboard data |
//! | [`error`] | Error types |
//!
//! ```
//! use tourbus_core::{Role, SessionAuthority};
//!
//! let authority = SessionAuthority::default();
//! assert_eq!(authority.role(), Role::Guest);
//!
//! authority.login("  driver ", "driver123").unwrap();
//! assert_eq!(authority.role(), Role::Driver);
//!
//! authority.logout();
//! assert_eq!(authority.username(), None);
//! ```

pub mod auth;
pub mod cafe;
pub mod content;
pub mod error;
pub mod telemetry;

pub use auth::{Credential, CredentialTable, Role, Session, SessionAuthority, StaffRole};
pub use content::{allows, help_for, shortcuts_for, Destination, HelpContent, Shortcut};
pub use cafe::CafeOrder;
pub use error::{AuthError, CafeError, Result};
