//! Campaign picker component.
//!
//! A multi-select list with live filtering. The filter matches
//! case-insensitively against the full fetched set, never against the
//! currently filtered subset. Select-all and clear-all act on the rendered
//! subset only; filtered-out items keep their state. A re-fetch replaces
//! the whole list and drops prior check state.

use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct CampaignItem {
    pub name: String,
    pub checked: bool,
}

pub struct CampaignPickerComponent {
    items: Vec<CampaignItem>,
    filter: String,
    /// Highlight position within the visible subset.
    highlight: usize,
    list_state: ListState,
    pub focused: bool,
    /// Whether the checkbox list is disclosed (dropdown open).
    pub open: bool,
}

impl CampaignPickerComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            highlight: 0,
            list_state: ListState::default(),
            focused: false,
            open: false,
        }
    }

    /// Replace the list with a freshly fetched set. Prior check state is
    /// not retained across re-fetches.
    pub fn set_campaigns(&mut self, names: Vec<String>) {
        self.items = names
            .into_iter()
            .map(|name| CampaignItem { name, checked: false })
            .collect();
        self.highlight = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Indices into the full set that match the current filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.items.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Names of the visible items, in fetched order.
    pub fn visible_names(&self) -> Vec<&str> {
        self.visible_indices()
            .into_iter()
            .map(|i| self.items[i].name.as_str())
            .collect()
    }

    /// Checked campaign names across the full set, in fetched order.
    pub fn checked_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.name.clone())
            .collect()
    }

    /// Check every currently rendered item. Filtered-out items are
    /// unaffected.
    pub fn select_all_visible(&mut self) {
        for index in self.visible_indices() {
            self.items[index].checked = true;
        }
    }

    /// Uncheck every currently rendered item. Filtered-out items are
    /// unaffected.
    pub fn clear_all_visible(&mut self) {
        for index in self.visible_indices() {
            self.items[index].checked = false;
        }
    }

    pub fn toggle_highlighted(&mut self) {
        let visible = self.visible_indices();
        if let Some(&index) = visible.get(self.highlight) {
            self.items[index].checked = !self.items[index].checked;
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.highlight = 0;
    }

    fn move_highlight_down(&mut self) {
        let count = self.visible_indices().len();
        if count > 0 {
            self.highlight = (self.highlight + 1) % count;
        }
    }

    fn move_highlight_up(&mut self) {
        let count = self.visible_indices().len();
        if count > 0 {
            self.highlight = if self.highlight == 0 { count - 1 } else { self.highlight - 1 };
        }
    }
}

impl Component for CampaignPickerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.select_all_visible();
                Action::None
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_all_visible();
                Action::None
            }
            KeyCode::Char(c) => {
                self.filter.push(c);
                self.highlight = 0;
                Action::None
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.highlight = 0;
                Action::None
            }
            KeyCode::Esc if !self.filter.is_empty() => {
                self.filter.clear();
                self.highlight = 0;
                Action::None
            }
            KeyCode::Down => {
                self.move_highlight_down();
                Action::None
            }
            KeyCode::Up => {
                self.move_highlight_up();
                Action::None
            }
            KeyCode::Enter => {
                self.toggle_highlighted();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Campaigns ");
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.height == 0 {
            return;
        }

        // Filter line at the top, with a cursor when focused
        let filter_text = if self.focused {
            format!("Filter: {}█", self.filter)
        } else if self.filter.is_empty() {
            "Filter:".to_string()
        } else {
            format!("Filter: {}", self.filter)
        };
        let filter_area = Rect::new(inner.x, inner.y, inner.width, 1);
        f.render_widget(
            Paragraph::new(filter_text).style(Style::default().fg(Color::Gray)),
            filter_area,
        );

        if inner.height <= 1 {
            return;
        }
        let list_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);

        if !self.open {
            let hint = Paragraph::new("Tab here to choose campaigns").style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, list_area);
            return;
        }

        let visible = self.visible_indices();
        if visible.is_empty() {
            f.render_widget(
                Paragraph::new("No campaigns found.").style(Style::default().fg(Color::DarkGray)),
                list_area,
            );
            return;
        }

        let rows: Vec<ListItem> = visible
            .iter()
            .map(|&index| {
                let item = &self.items[index];
                let mark = if item.checked { "[x]" } else { "[ ]" };
                let style = if item.checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(format!("{mark} {}", item.name), style))
            })
            .collect();

        self.list_state.select(Some(self.highlight.min(visible.len() - 1)));
        let list = List::new(rows)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, list_area, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.open = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.open = false;
    }
}

impl Default for CampaignPickerComponent {
    fn default() -> Self {
        Self::new()
    }
}
