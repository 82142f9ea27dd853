//! Transient notification banner.
//!
//! One shared banner line: a later call overwrites the content and restarts
//! the hide timer, so concurrent completions simply race for the last word.

use crate::constants::NOTIFICATION_TIMEOUT_SECS;
use crate::ui::core::Severity;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

pub struct NotificationBanner {
    message: String,
    severity: Severity,
    shown_at: Option<Instant>,
}

impl NotificationBanner {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            severity: Severity::Success,
            shown_at: None,
        }
    }

    /// Show a message, replacing whatever is currently displayed and
    /// restarting the hide timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, at: Instant) {
        self.message = message.into();
        self.severity = severity;
        self.shown_at = Some(at);
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Called on every tick; hides the banner once the timeout elapses.
    pub fn tick(&mut self) {
        self.hide_if_expired_at(Instant::now());
    }

    pub fn hide_if_expired_at(&mut self, now: Instant) {
        if let Some(shown_at) = self.shown_at {
            if now.duration_since(shown_at) >= Duration::from_secs(NOTIFICATION_TIMEOUT_SECS) {
                self.shown_at = None;
                self.message.clear();
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        if self.shown_at.is_none() {
            return;
        }

        let style = match self.severity {
            Severity::Success => Style::default().fg(Color::Black).bg(Color::Green),
            Severity::Error => Style::default().fg(Color::White).bg(Color::Red),
        };

        let banner = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD));
        f.render_widget(banner, area);
    }
}

impl Default for NotificationBanner {
    fn default() -> Self {
        Self::new()
    }
}
