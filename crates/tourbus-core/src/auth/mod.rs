//! Authentication module for staff access
//!
//! The console starts every run as a guest. Drivers, crew employees and
//! administrators log in against a fixed credential table to unlock their
//! dashboards; logging out returns the console to the guest state.
//!
//! # Model
//!
//! - [`Role`] is the closed set of roles views branch on
//! - [`Credential`] rows only ever carry a [`StaffRole`]
//! - [`Session`] makes "guest iff no username" unrepresentable otherwise
//! - [`SessionAuthority`] owns the one session of the process and is the only
//!   writer of it

mod authority;
mod credentials;
mod role;
mod session;

pub use authority::SessionAuthority;
pub use credentials::{Credential, CredentialTable};
pub use role::{Role, StaffRole};
pub use session::Session;
