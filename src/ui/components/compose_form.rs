//! Email compose form component.
//!
//! Owns the `ComposeSession` for the current draft and renders the
//! recipients, subject, schedule, and body fields. Field navigation is
//! Up/Down inside the form; the schedule panel is a disclosure toggled
//! from the app level.

use crate::compose::{ComposeSession, ScheduleChoice};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Recipients,
    Subject,
    Schedule,
    CustomSchedule,
    Body,
}

pub struct ComposeFormComponent {
    pub session: ComposeSession,
    pub field: FormField,
    pub focused: bool,
}

impl ComposeFormComponent {
    pub fn new() -> Self {
        Self {
            session: ComposeSession::new(),
            field: FormField::default(),
            focused: false,
        }
    }

    /// Fields reachable with Up/Down, given the current disclosure state.
    fn field_order(&self) -> Vec<FormField> {
        let mut order = vec![FormField::Recipients, FormField::Subject];
        if self.session.schedule_open {
            order.push(FormField::Schedule);
            if self.session.custom_schedule_visible() {
                order.push(FormField::CustomSchedule);
            }
        }
        order.push(FormField::Body);
        order
    }

    fn move_field(&mut self, forward: bool) {
        let order = self.field_order();
        let current = order.iter().position(|&f| f == self.field).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else if current == 0 {
            order.len() - 1
        } else {
            current - 1
        };
        self.field = order[next];
    }

    /// Keep the active field reachable after a disclosure change.
    pub fn clamp_field(&mut self) {
        if !self.field_order().contains(&self.field) {
            self.field = FormField::Recipients;
        }
    }

    fn active_buffer_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Recipients => Some(&mut self.session.recipients),
            FormField::Subject => Some(&mut self.session.subject),
            FormField::CustomSchedule => Some(&mut self.session.custom_schedule),
            FormField::Body => Some(&mut self.session.body),
            FormField::Schedule => None,
        }
    }

    fn cycle_schedule(&mut self) {
        self.session.schedule = self.session.schedule.next();
        self.clamp_field();
    }

    fn field_paragraph<'a>(&self, text: &'a str, title: &'a str, active: bool) -> Paragraph<'a> {
        let border_style = if active && self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let display = if active && self.focused {
            format!("{text}█")
        } else {
            text.to_string()
        };
        Paragraph::new(display)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(format!(" {title} ")),
            )
            .wrap(Wrap { trim: false })
    }
}

impl Component for ComposeFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down => {
                self.move_field(true);
                Action::None
            }
            KeyCode::Up => {
                self.move_field(false);
                Action::None
            }
            KeyCode::Enter => {
                match self.field {
                    FormField::Body => {
                        self.session.body.push('\n');
                    }
                    FormField::Schedule => self.cycle_schedule(),
                    _ => self.move_field(true),
                }
                Action::None
            }
            KeyCode::Char(' ') if self.field == FormField::Schedule => {
                self.cycle_schedule();
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.active_buffer_mut() {
                    buffer.push(c);
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.active_buffer_mut() {
                    buffer.pop();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut constraints = vec![Constraint::Length(3), Constraint::Length(3)];
        if self.session.schedule_open {
            constraints.push(Constraint::Length(3));
            if self.session.custom_schedule_visible() {
                constraints.push(Constraint::Length(3));
            }
        }
        constraints.push(Constraint::Min(5));

        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(rect);
        let mut next = 0;

        let recipients = self.session.recipients.clone();
        f.render_widget(
            self.field_paragraph(&recipients, "To (comma-separated)", self.field == FormField::Recipients),
            areas[next],
        );
        next += 1;

        let subject = self.session.subject.clone();
        f.render_widget(
            self.field_paragraph(&subject, "Subject", self.field == FormField::Subject),
            areas[next],
        );
        next += 1;

        if self.session.schedule_open {
            let schedule_label = format!("{} (Space to change)", self.session.schedule.label());
            f.render_widget(
                self.field_paragraph(&schedule_label, "Schedule", self.field == FormField::Schedule),
                areas[next],
            );
            next += 1;

            if self.session.custom_schedule_visible() {
                let custom = self.session.custom_schedule.clone();
                f.render_widget(
                    self.field_paragraph(&custom, "Send at (YYYY-MM-DD HH:MM)", self.field == FormField::CustomSchedule),
                    areas[next],
                );
                next += 1;
            }
        }

        let body = self.session.body.clone();
        f.render_widget(
            self.field_paragraph(&body, "Body (HTML)", self.field == FormField::Body),
            areas[next],
        );
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

impl Default for ComposeFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
