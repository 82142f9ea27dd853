//! Attachment list panel.
//!
//! Shows the queued files for the current draft and lets the user remove
//! one by index. The component renders its own copy of the list; the app
//! refreshes it whenever the session's attachment set changes.

use crate::compose::Attachment;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct AttachmentListComponent {
    attachments: Vec<Attachment>,
    selected: usize,
    list_state: ListState,
    pub focused: bool,
}

impl AttachmentListComponent {
    pub fn new() -> Self {
        Self {
            attachments: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            focused: false,
        }
    }

    pub fn update_data(&mut self, attachments: Vec<Attachment>) {
        self.attachments = attachments;
        if self.selected >= self.attachments.len() {
            self.selected = self.attachments.len().saturating_sub(1);
        }
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

impl Component for AttachmentListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down => {
                if !self.attachments.is_empty() {
                    self.selected = (self.selected + 1) % self.attachments.len();
                }
                Action::None
            }
            KeyCode::Up => {
                if !self.attachments.is_empty() {
                    self.selected = if self.selected == 0 {
                        self.attachments.len() - 1
                    } else {
                        self.selected - 1
                    };
                }
                Action::None
            }
            KeyCode::Delete | KeyCode::Char('x') => {
                if self.attachments.is_empty() {
                    Action::None
                } else {
                    Action::RemoveAttachment(self.selected)
                }
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
        let title = format!(" Attachments ({}) ", self.attachments.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.attachments.is_empty() {
            f.render_widget(
                Paragraph::new("No files queued. Ctrl+O to attach.").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let rows: Vec<ListItem> = self
            .attachments
            .iter()
            .map(|a| ListItem::new(format!("{}  ({})", a.file_name, a.path.display())))
            .collect();

        self.list_state.select(Some(self.selected));
        let list = List::new(rows)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, inner, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

impl Default for AttachmentListComponent {
    fn default() -> Self {
        Self::new()
    }
}
