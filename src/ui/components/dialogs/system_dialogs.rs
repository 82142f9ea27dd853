//! Help and logs dialogs.

use super::common::create_dialog_block;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Cycle panes (form, attachments, campaigns)"),
    ("Up / Down", "Move between form fields or list entries"),
    ("Ctrl+S", "Send the composed email"),
    ("Ctrl+T", "Browse templates"),
    ("Ctrl+N", "Create a campaign"),
    ("Ctrl+O", "Attach files"),
    ("Ctrl+E", "Toggle schedule options"),
    ("Enter (campaigns)", "Toggle the highlighted campaign"),
    ("Ctrl+A / Ctrl+D (campaigns)", "Select / clear all shown campaigns"),
    ("x or Del (attachments)", "Remove the selected attachment"),
    ("Ctrl+G", "Show logs"),
    ("F1", "This help"),
    ("Ctrl+Q", "Quit"),
];

pub fn render_help(f: &mut Frame, scroll_offset: usize) {
    let area = LayoutManager::centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" Help - Esc to close ", Color::Yellow);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = HELP_TEXT
        .iter()
        .skip(scroll_offset)
        .map(|(key, desc)| Line::from(format!("{key:<30} {desc}")))
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_logs(f: &mut Frame, logger: &Logger, scroll_offset: usize) {
    let area = LayoutManager::centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" Logs - Esc to close ", Color::Blue);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let logs = logger.get_logs();
    let lines: Vec<Line> = logs
        .iter()
        .skip(scroll_offset)
        .map(|entry| Line::styled(entry.clone(), Style::default().fg(Color::Gray)))
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
