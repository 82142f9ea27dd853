//! Template browser dialog rendering.

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::UNTITLED_TEMPLATE;
use crate::ui::components::dialog_component::DialogComponent;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, dialog: &DialogComponent, list_state: &mut ListState) {
    let area = LayoutManager::centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let block = create_dialog_block(" Templates ", Color::Magenta);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    if dialog.templates_loading {
        f.render_widget(
            Paragraph::new("Loading templates...").style(Style::default().fg(Color::DarkGray)),
            rows[0],
        );
    } else if dialog.templates.is_empty() {
        f.render_widget(
            Paragraph::new("No templates saved yet. Press 'n' to add one.").style(Style::default().fg(Color::DarkGray)),
            rows[0],
        );
    } else {
        let items: Vec<ListItem> = dialog
            .templates
            .iter()
            .map(|t| ListItem::new(t.title.as_deref().unwrap_or(UNTITLED_TEMPLATE).to_string()))
            .collect();

        list_state.select(Some(dialog.selected_template.min(dialog.templates.len() - 1)));
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, rows[0], list_state);
    }

    let instructions = [
        shortcuts::ENTER_USE,
        shortcuts::SEPARATOR,
        ("n", Color::Cyan, " New template"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), rows[1]);
}
