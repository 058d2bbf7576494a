//! Transient toasts shown over the content area

use std::collections::VecDeque;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::{Theme, Tone};

/// Toasts kept at once; older ones are dropped
const MAX_VISIBLE: usize = 3;

const TOAST_HEIGHT: u16 = 3;
const TOAST_MAX_WIDTH: u16 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Lifetime in UI ticks (100 ms each at the default tick rate)
    fn lifetime(self) -> u64 {
        match self {
            NotificationLevel::Info | NotificationLevel::Success => 30,
            NotificationLevel::Warning => 50,
            NotificationLevel::Error => 60,
        }
    }

    fn tone(self) -> Tone {
        match self {
            NotificationLevel::Info => Tone::Info,
            NotificationLevel::Success => Tone::Good,
            NotificationLevel::Warning => Tone::Warning,
            NotificationLevel::Error => Tone::Danger,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Remaining UI ticks
    pub ttl: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            ttl: level.lifetime(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    /// Draw as a bordered box in the top-right corner of `area`
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = theme.tone(self.level.tone());
        let text = format!("{} {}", self.level.icon(), self.message);

        let width = (text.chars().count() as u16 + 4)
            .min(TOAST_MAX_WIDTH)
            .min(area.width);
        let toast = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y,
            width,
            TOAST_HEIGHT.min(area.height),
        );

        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            toast,
        );
    }
}

/// Queue of live toasts, newest last
#[derive(Debug, Default)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(message = %notification.message, level = ?notification.level, "Notification");
        if self.queue.len() == MAX_VISIBLE {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        self.queue.retain_mut(|n| {
            n.ttl = n.ttl.saturating_sub(1);
            !n.is_expired()
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Stack toasts downwards from the top of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut y = area.y + 1;
        for notification in &self.queue {
            let bottom = area.y + area.height;
            if y >= bottom {
                break;
            }
            let slot = Rect::new(area.x, y, area.width, bottom - y);
            notification.render(frame, slot, theme);
            y += TOAST_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetimes_by_level() {
        assert_eq!(Notification::success("ok").ttl, 30);
        assert_eq!(Notification::warning("hm").ttl, 50);
        assert_eq!(Notification::error("no").ttl, 60);
    }

    #[test]
    fn test_expiry() {
        let mut manager = NotificationManager::new();
        manager.push(Notification {
            ttl: 2,
            ..Notification::info("a")
        });
        manager.tick();
        assert!(!manager.is_empty());
        manager.tick();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_only_latest_kept() {
        let mut manager = NotificationManager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("n{i}")));
        }
        let messages: Vec<_> = manager.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n2", "n3", "n4"]);
    }
}
