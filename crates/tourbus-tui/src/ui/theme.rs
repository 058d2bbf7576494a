//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Semantic accent for status pills and values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Danger,
    Info,
    Muted,
}

/// Console color palette
pub struct Theme {
    // Primary branding colors
    pub brand: Color,
    pub brand_soft: Color,
    pub background: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Progress bar colors
    pub progress_filled: Color,
    pub progress_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Color::Rgb(0, 172, 193),     // #00ACC1
            brand_soft: Color::Rgb(128, 222, 234), // #80DEEA
            background: Color::Rgb(18, 24, 28),

            success: Color::Rgb(76, 175, 80), // #4CAF50
            warning: Color::Rgb(255, 152, 0), // #FF9800
            danger: Color::Rgb(244, 67, 54),  // #F44336
            info: Color::Rgb(33, 150, 243),   // #2196F3

            border: Color::Rgb(66, 78, 84),
            border_focused: Color::Rgb(0, 172, 193),
            text_primary: Color::Rgb(250, 250, 250),
            text_secondary: Color::Rgb(189, 189, 189),
            text_muted: Color::Rgb(117, 117, 117),
            selection: Color::Rgb(38, 50, 56),

            progress_filled: Color::Rgb(0, 172, 193),
            progress_empty: Color::Rgb(55, 66, 71),
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for a semantic tone
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Good => self.success(),
            Tone::Warning => self.warning(),
            Tone::Danger => self.danger(),
            Tone::Info => self.info(),
            Tone::Muted => self.text_muted(),
        }
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.brand)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.selection)
        } else {
            Style::default().fg(self.text_secondary).bg(self.background)
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            brand: Color::Yellow,
            ..Self::default()
        }
    }
}
