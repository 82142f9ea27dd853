//! Attachment path entry dialog rendering.

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::components::dialog_component::DialogComponent;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Clear,
    Frame,
};

pub fn render(f: &mut Frame, dialog: &DialogComponent) {
    let area = LayoutManager::centered_rect(70, 25, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" Attach Files ", Color::Cyan);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        create_input_paragraph(&dialog.attachment_path, "File path(s), comma-separated", true),
        rows[0],
    );

    let instructions = [
        ("Enter", Color::Green, " Add"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), rows[2]);
}
