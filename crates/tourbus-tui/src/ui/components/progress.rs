//! Progress bar and spinner components

use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

use crate::ui::{Theme, Tone};

/// Progress bar with percentage display
pub struct ProgressBar {
    /// Current progress (0.0 - 1.0)
    progress: f64,
    label: String,
    show_percent: bool,
    tone: Option<Tone>,
}

impl ProgressBar {
    pub fn new(progress: f64, label: impl Into<String>) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            label: label.into(),
            show_percent: true,
            tone: None,
        }
    }

    /// Create from a percentage value
    pub fn from_percent(percent: f64, label: impl Into<String>) -> Self {
        Self::new(percent / 100.0, label)
    }

    pub fn hide_percent(mut self) -> Self {
        self.show_percent = false;
        self
    }

    /// Fill with a status color instead of the brand color
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let percent = self.percent();

        let label = if self.show_percent {
            format!("{} - {}%", self.label, percent)
        } else {
            self.label.clone()
        };

        let fill = match self.tone {
            Some(tone) => theme.tone(tone).fg.unwrap_or(theme.progress_filled),
            None => theme.progress_filled,
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(fill).bg(theme.progress_empty))
            .percent(percent.min(100))
            .label(label);

        frame.render_widget(gauge, area);
    }
}

/// Spinner animation for indeterminate progress
pub struct Spinner {
    frame: usize,
    chars: &'static [char],
    label: String,
}

impl Spinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            frame: 0,
            chars: &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'],
            label: label.into(),
        }
    }

    /// Set frame based on tick counter
    pub fn set_tick(&mut self, tick: u64) {
        self.frame = (tick as usize / 2) % self.chars.len();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let text = format!("{} {}", self.chars[self.frame], self.label);
        let paragraph = Paragraph::new(text)
            .style(theme.text_highlight())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Text bar for places a gauge does not fit, e.g. `████░░░░`
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
