//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Main screen areas: content on top, banner line, status line.
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Content split: campaign picker sidebar on the left, composer on the right.
    #[must_use]
    pub fn content_layout(area: Rect, picker_width: u16) -> Vec<Rect> {
        let picker_width = picker_width.min(area.width / 2);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(picker_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Composer column: form fields above, attachment panel below.
    #[must_use]
    pub fn composer_layout(area: Rect, attachment_count: usize) -> Vec<Rect> {
        let attachments_height = (attachment_count as u16).clamp(1, 6) + 2;
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(attachments_height)])
            .split(area)
            .to_vec()
    }

    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
