//! Modal dialog component.
//!
//! One component hosts every modal: campaign creation, the template browser
//! and add-template form, attachment entry, help, and logs. Input buffers
//! live here; submission emits actions for the app to execute, and local
//! validation failures surface through the notification banner without
//! closing the dialog or touching the network.

use crate::api::models::Template;
use crate::constants::{ERROR_CAMPAIGN_FORM, ERROR_TEMPLATE_FORM, UNTITLED_TEMPLATE};
use crate::logger::Logger;
use crate::ui::components::dialogs::{
    attachment_dialog, campaign_creation_dialog, system_dialogs, template_browser_dialog, template_creation_dialog,
};
use crate::ui::core::{Action, Component, DialogType, Severity};
use crate::validation::split_list;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ListState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,

    // Campaign creation form
    pub campaign_name: String,
    pub campaign_mailing_list: String,

    // Template creation form
    pub template_title: String,
    pub template_content: String,

    // Attachment entry
    pub attachment_path: String,

    // Template browser
    pub templates: Vec<Template>,
    pub templates_loading: bool,
    pub selected_template: usize,
    browser_list_state: ListState,

    /// Which input of a two-field form is active (0 or 1).
    pub active_field: usize,
    pub scroll_offset: usize,

    logger: Logger,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            campaign_name: String::new(),
            campaign_mailing_list: String::new(),
            template_title: String::new(),
            template_content: String::new(),
            attachment_path: String::new(),
            templates: Vec::new(),
            templates_loading: false,
            selected_template: 0,
            browser_list_state: ListState::default(),
            active_field: 0,
            scroll_offset: 0,
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        if dialog_type == DialogType::TemplateBrowser {
            self.templates_loading = true;
            self.selected_template = 0;
        }
        self.active_field = 0;
        self.scroll_offset = 0;
        self.dialog_type = Some(dialog_type);
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
    }

    pub fn set_templates(&mut self, templates: Vec<Template>) {
        self.templates = templates;
        self.templates_loading = false;
        if self.selected_template >= self.templates.len() {
            self.selected_template = 0;
        }
    }

    pub fn reset_campaign_form(&mut self) {
        self.campaign_name.clear();
        self.campaign_mailing_list.clear();
        self.active_field = 0;
    }

    pub fn reset_template_form(&mut self) {
        self.template_title.clear();
        self.template_content.clear();
        self.active_field = 0;
    }

    pub fn reset_attachment_form(&mut self) {
        self.attachment_path.clear();
    }

    /// Submit the campaign form: trim the name, split the mailing list on
    /// commas dropping empties, and reject locally when either is empty.
    /// Nothing is sent on rejection and the dialog stays open.
    fn submit_campaign(&mut self) -> Action {
        let name = self.campaign_name.trim().to_string();
        let mailing_list = split_list(&self.campaign_mailing_list);

        if name.is_empty() || mailing_list.is_empty() {
            return Action::Notify {
                message: ERROR_CAMPAIGN_FORM.to_string(),
                severity: Severity::Error,
            };
        }

        self.logger.log(format!("Dialog: submitting campaign '{name}'"));
        Action::CreateCampaign { name, mailing_list }
    }

    fn submit_template(&mut self) -> Action {
        let title = self.template_title.trim().to_string();
        let content = self.template_content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Action::Notify {
                message: ERROR_TEMPLATE_FORM.to_string(),
                severity: Severity::Error,
            };
        }

        self.logger.log(format!("Dialog: submitting template '{title}'"));
        Action::SaveTemplate { title, content }
    }

    fn submit_attachment(&mut self) -> Action {
        let paths = split_list(&self.attachment_path);
        if paths.is_empty() {
            return Action::HideDialog;
        }
        Action::AddAttachments(paths)
    }

    fn use_selected_template(&mut self) -> Action {
        if let Some(template) = self.templates.get(self.selected_template) {
            self.logger.log(format!(
                "Dialog: applying template '{}'",
                template.title.as_deref().unwrap_or(UNTITLED_TEMPLATE)
            ));
            Action::UseTemplate {
                content: template.content.clone(),
            }
        } else {
            Action::None
        }
    }

    fn two_field_input(&mut self, key: KeyEvent, is_campaign: bool) -> Action {
        let (first, second) = if is_campaign {
            (&mut self.campaign_name, &mut self.campaign_mailing_list)
        } else {
            (&mut self.template_title, &mut self.template_content)
        };
        let buffer = if self.active_field == 0 { first } else { second };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_field = 1 - self.active_field;
            }
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        if key.code == KeyCode::Esc {
            return Action::HideDialog;
        }

        match dialog_type {
            DialogType::CampaignCreation => match key.code {
                KeyCode::Enter => self.submit_campaign(),
                _ => self.two_field_input(key, true),
            },
            DialogType::TemplateCreation => match key.code {
                // Content is a multi-line HTML field
                KeyCode::Enter if self.active_field == 1 => {
                    self.template_content.push('\n');
                    Action::None
                }
                KeyCode::Enter => self.submit_template(),
                _ => self.two_field_input(key, false),
            },
            DialogType::AttachmentAdd => match key.code {
                KeyCode::Enter => self.submit_attachment(),
                KeyCode::Char(c) => {
                    self.attachment_path.push(c);
                    Action::None
                }
                KeyCode::Backspace => {
                    self.attachment_path.pop();
                    Action::None
                }
                _ => Action::None,
            },
            DialogType::TemplateBrowser => match key.code {
                KeyCode::Down => {
                    if !self.templates.is_empty() {
                        self.selected_template = (self.selected_template + 1) % self.templates.len();
                    }
                    Action::None
                }
                KeyCode::Up => {
                    if !self.templates.is_empty() {
                        self.selected_template = if self.selected_template == 0 {
                            self.templates.len() - 1
                        } else {
                            self.selected_template - 1
                        };
                    }
                    Action::None
                }
                KeyCode::Enter => self.use_selected_template(),
                KeyCode::Char('n') => Action::ShowDialog(DialogType::TemplateCreation),
                _ => Action::None,
            },
            DialogType::Help | DialogType::Logs => match key.code {
                KeyCode::Down => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                KeyCode::Up => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, _rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::CampaignCreation => campaign_creation_dialog::render(f, self),
            DialogType::TemplateCreation => template_creation_dialog::render(f, self),
            DialogType::AttachmentAdd => attachment_dialog::render(f, self),
            DialogType::TemplateBrowser => {
                let mut list_state = std::mem::take(&mut self.browser_list_state);
                template_browser_dialog::render(f, self, &mut list_state);
                self.browser_list_state = list_state;
            }
            DialogType::Help => system_dialogs::render_help(f, self.scroll_offset),
            DialogType::Logs => system_dialogs::render_logs(f, &self.logger, self.scroll_offset),
        }
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
