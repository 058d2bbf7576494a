//! Screen modules for different views

pub mod assistance;
pub mod cafe;
pub mod climate;
pub mod crew;
pub mod driver;
pub mod energy;
pub mod help;
pub mod home;
pub mod login;
pub mod splash;
pub mod vacuum;

use ratatui::prelude::*;

use crate::ui::Theme;

/// `label: value` line used across the dashboards
pub(crate) fn field<'a>(label: &'a str, value: impl Into<String>, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.text_muted()),
        Span::styled(value.into(), theme.text()),
    ])
}
