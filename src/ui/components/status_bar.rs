//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, sending: bool, fetching: bool) {
        let status_text = if sending {
            "Sending email...".to_string()
        } else if fetching {
            "Fetching from server...".to_string()
        } else {
            "Tab: panes • Ctrl+S: send • Ctrl+T: templates • Ctrl+N: campaign • Ctrl+O: attach • Ctrl+E: schedule • F1: help • Ctrl+Q: quit"
                .to_string()
        };

        let status_color = if sending || fetching { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
