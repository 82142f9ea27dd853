//! Campaign creation dialog rendering.

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
    let area = LayoutManager::centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" New Campaign ", Color::Green);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        create_input_paragraph(&dialog.campaign_name, "Campaign name", dialog.active_field == 0),
        rows[0],
    );
    f.render_widget(
        create_input_paragraph(
            &dialog.campaign_mailing_list,
            "Mailing list (comma-separated emails)",
            dialog.active_field == 1,
        ),
        rows[1],
    );

    let instructions = [
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_FIELD,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), rows[3]);
}
