//! Add-template dialog rendering.

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
    let area = LayoutManager::centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" New Template ", Color::Magenta);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        create_input_paragraph(&dialog.template_title, "Title", dialog.active_field == 0),
        rows[0],
    );
    f.render_widget(
        create_input_paragraph(&dialog.template_content, "Content (HTML)", dialog.active_field == 1),
        rows[1],
    );

    let instructions = [
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_FIELD,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), rows[2]);
}
