//! Reusable UI components

pub mod header;
pub mod notification;
pub mod progress;
pub mod status_bar;
