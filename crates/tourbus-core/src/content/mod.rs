//! Role-keyed content shown by the console
//!
//! Both tables are exhaustive matches over [`Role`](crate::Role), so a new
//! role does not compile until it has shortcut cards and a help bundle.

mod help;
mod shortcuts;

pub use help::{help_for, HelpContact, HelpContent, HelpQuickAction};
pub use shortcuts::{allows, shortcuts_for, Destination, Shortcut};
