//! Smart Tourist Bus terminal console
//!
//! Renders the passenger home screen, the staff login form and the
//! role-gated dashboards on top of [`tourbus_core`].

pub mod app;
pub mod ui;

pub use app::App;
