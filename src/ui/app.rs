//! Application component: state, key routing, and action dispatch.

use crate::api::ApiClient;
use crate::compose::ScheduleChoice;
use crate::config::Config;
use crate::constants::{
    ERROR_CAMPAIGN_CREATE, ERROR_EMAIL_SEND, ERROR_TEMPLATE_LOAD, ERROR_TEMPLATE_SAVE, SUCCESS_CAMPAIGN_CREATED,
    SUCCESS_EMAIL_SENT, SUCCESS_TEMPLATE_SAVED,
};
use crate::logger::Logger;
use crate::ui::components::{
    AttachmentListComponent, CampaignPickerComponent, ComposeFormComponent, DialogComponent, NotificationBanner,
    StatusBar,
};
use crate::ui::core::{Action, Component, DialogType, EventType, PaneFocus, Severity, TaskManager};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::Path;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Send control disabled while exactly one send is in flight
    pub sending: bool,
    pub fetching_campaigns: bool,
    pub fetching_templates: bool,
}

pub struct AppComponent {
    // Component composition
    picker: CampaignPickerComponent,
    form: ComposeFormComponent,
    attachments: AttachmentListComponent,
    dialog: DialogComponent,
    banner: NotificationBanner,

    // Application state
    state: AppState,
    focus: PaneFocus,

    // Services
    api: ApiClient,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    picker_width: u16,
    fetch_on_startup: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        let mut form = ComposeFormComponent::new();
        form.on_focus();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        Self {
            picker: CampaignPickerComponent::new(),
            form,
            attachments: AttachmentListComponent::new(),
            dialog,
            banner: NotificationBanner::new(),
            state: AppState::default(),
            focus: PaneFocus::Form,
            api,
            task_manager,
            background_action_rx,
            logger,
            picker_width: config.ui.picker_width,
            fetch_on_startup: config.ui.fetch_campaigns_on_startup,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_visible()
    }

    /// Initial campaign fetch so the picker has data before first focus.
    pub fn trigger_startup_fetch(&mut self) {
        if self.fetch_on_startup {
            self.logger.log("App: fetching campaign list on startup".to_string());
            self.dispatch(Action::FetchCampaigns);
        }
    }

    pub async fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        match event {
            EventType::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = self.route_key(key);
                    self.dispatch(action);
                }
            }
            EventType::Tick => {
                self.banner.tick();
                self.task_manager.cleanup_finished_tasks();
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
        Ok(())
    }

    /// Drain completed background work without blocking.
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Route a key press: an open dialog sees everything first, then global
    /// shortcuts, then the focused pane.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('s') if ctrl => Action::SendEmail,
            KeyCode::Char('t') if ctrl => Action::ShowDialog(DialogType::TemplateBrowser),
            KeyCode::Char('n') if ctrl => Action::ShowDialog(DialogType::CampaignCreation),
            KeyCode::Char('o') if ctrl => Action::ShowDialog(DialogType::AttachmentAdd),
            KeyCode::Char('g') if ctrl => Action::ShowDialog(DialogType::Logs),
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('e') if ctrl => {
                self.form.session.toggle_schedule_panel();
                self.form.clamp_field();
                Action::None
            }
            _ => match self.focus {
                PaneFocus::Form => self.form.handle_key_events(key),
                PaneFocus::Attachments => self.attachments.handle_key_events(key),
                PaneFocus::Picker => self.picker.handle_key_events(key),
            },
        }
    }

    /// Process an action and whatever it chains into.
    pub fn dispatch(&mut self, mut action: Action) {
        loop {
            action = self.handle_action(action);
            if matches!(action, Action::None) {
                break;
            }
        }
    }

    fn set_focus(&mut self, focus: PaneFocus) {
        match self.focus {
            PaneFocus::Form => self.form.on_blur(),
            PaneFocus::Attachments => self.attachments.on_blur(),
            PaneFocus::Picker => self.picker.on_blur(),
        }
        self.focus = focus;
        match self.focus {
            PaneFocus::Form => self.form.on_focus(),
            PaneFocus::Attachments => self.attachments.on_focus(),
            PaneFocus::Picker => {
                self.picker.on_focus();
                // Focusing the picker re-fetches when a cached list exists,
                // like the browser dropdown did.
                if !self.picker.is_empty() {
                    self.dispatch(Action::FetchCampaigns);
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                Action::None
            }
            Action::FocusPrevious => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            Action::SendEmail => self.submit_email(),
            Action::CreateCampaign { name, mailing_list } => {
                self.logger.log(format!("App: creating campaign '{name}'"));
                self.task_manager.spawn_campaign_create(self.api.clone(), name, mailing_list);
                Action::None
            }
            Action::SaveTemplate { title, content } => {
                self.logger.log(format!("App: saving template '{title}'"));
                self.task_manager.spawn_template_save(self.api.clone(), title, content);
                Action::None
            }
            Action::FetchCampaigns => {
                self.state.fetching_campaigns = true;
                self.task_manager.spawn_campaign_fetch(self.api.clone());
                Action::None
            }
            Action::FetchTemplates => {
                self.state.fetching_templates = true;
                self.dialog.templates_loading = true;
                self.task_manager.spawn_template_fetch(self.api.clone());
                Action::None
            }
            Action::AddAttachments(paths) => self.add_attachments(paths),
            Action::RemoveAttachment(index) => {
                if let Some(removed) = self.form.session.remove_attachment(index) {
                    self.logger.log(format!("App: removed attachment '{}'", removed.file_name));
                }
                self.attachments.update_data(self.form.session.attachments.clone());
                Action::None
            }
            Action::UseTemplate { content } => {
                self.form.session.load_template(&content);
                self.dialog.hide();
                Action::None
            }
            Action::CampaignsLoaded(names) => {
                self.state.fetching_campaigns = false;
                self.logger.log(format!("App: loaded {} campaigns", names.len()));
                self.picker.set_campaigns(names);
                Action::None
            }
            Action::CampaignsFetchFailed(message) => {
                // Logged only; the picker keeps whatever it had.
                self.state.fetching_campaigns = false;
                log::error!("campaign fetch failed: {message}");
                self.logger.log(format!("App: campaign fetch failed: {message}"));
                Action::None
            }
            Action::TemplatesLoaded(templates) => {
                self.state.fetching_templates = false;
                self.logger.log(format!("App: loaded {} templates", templates.len()));
                self.dialog.set_templates(templates);
                Action::None
            }
            Action::TemplatesFetchFailed(message) => {
                self.state.fetching_templates = false;
                self.dialog.templates_loading = false;
                log::error!("template fetch failed: {message}");
                self.logger.log(format!("App: template fetch failed: {message}"));
                Action::Notify {
                    message: ERROR_TEMPLATE_LOAD.to_string(),
                    severity: Severity::Error,
                }
            }
            Action::CampaignCreated(status) => {
                if status.success.is_truthy() {
                    self.dialog.hide();
                    self.dialog.reset_campaign_form();
                    Action::Notify {
                        message: SUCCESS_CAMPAIGN_CREATED.to_string(),
                        severity: Severity::Success,
                    }
                } else {
                    Action::Notify {
                        message: ERROR_CAMPAIGN_CREATE.to_string(),
                        severity: Severity::Error,
                    }
                }
            }
            Action::CampaignCreateFailed { message, transport } => {
                log::error!("campaign create failed: {message}");
                self.logger.log(format!("App: campaign create failed: {message}"));
                if transport {
                    // Transport failures are logged only.
                    Action::None
                } else {
                    Action::Notify {
                        message: ERROR_CAMPAIGN_CREATE.to_string(),
                        severity: Severity::Error,
                    }
                }
            }
            Action::TemplateSaved(status) => {
                // The server reports template success as the string "true".
                if status.success.is_true_string() {
                    self.dialog.hide();
                    self.dialog.reset_template_form();
                    self.dispatch(Action::FetchTemplates);
                    Action::Notify {
                        message: SUCCESS_TEMPLATE_SAVED.to_string(),
                        severity: Severity::Success,
                    }
                } else {
                    Action::Notify {
                        message: ERROR_TEMPLATE_SAVE.to_string(),
                        severity: Severity::Error,
                    }
                }
            }
            Action::TemplateSaveFailed { message, transport } => {
                log::error!("template save failed: {message}");
                self.logger.log(format!("App: template save failed: {message}"));
                if transport {
                    Action::None
                } else {
                    Action::Notify {
                        message: ERROR_TEMPLATE_SAVE.to_string(),
                        severity: Severity::Error,
                    }
                }
            }
            Action::SendFinished(status) => {
                self.state.sending = false;
                if status.success.is_truthy() {
                    self.form.session.reset_after_send();
                    self.form.clamp_field();
                    self.attachments.update_data(Vec::new());
                    self.logger.log("App: email sent".to_string());
                    Action::Notify {
                        message: SUCCESS_EMAIL_SENT.to_string(),
                        severity: Severity::Success,
                    }
                } else {
                    let message = status.message.unwrap_or_else(|| ERROR_EMAIL_SEND.to_string());
                    self.logger.log(format!("App: send rejected: {message}"));
                    Action::Notify {
                        message,
                        severity: Severity::Error,
                    }
                }
            }
            Action::SendFailed { message } => {
                self.state.sending = false;
                self.logger.log(format!("App: send failed: {message}"));
                Action::Notify {
                    message,
                    severity: Severity::Error,
                }
            }
            Action::Notify { message, severity } => {
                self.banner.show(message, severity);
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                let fetch = dialog_type == DialogType::TemplateBrowser;
                self.dialog.show(dialog_type);
                if fetch {
                    Action::FetchTemplates
                } else {
                    Action::None
                }
            }
            Action::HideDialog => {
                self.dialog.hide();
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Validate the draft and kick off the multipart send. The validation
    /// chain short-circuits on the first failure and nothing touches the
    /// network in that case.
    fn submit_email(&mut self) -> Action {
        if self.state.sending {
            // Send control is disabled while a send is in flight.
            return Action::None;
        }

        let checked = self.picker.checked_names();
        if let Err(issue) = self.form.session.validate(&checked) {
            return Action::Notify {
                message: issue.message().to_string(),
                severity: Severity::Error,
            };
        }

        let session = &self.form.session;
        let email = crate::api::client::OutgoingEmail {
            recipients: session.recipients.trim().to_string(),
            subject: session.subject.clone(),
            body: session.body.clone(),
            schedule: session.schedule.form_value().to_string(),
            custom_schedule: if session.schedule == ScheduleChoice::Custom {
                session.custom_schedule.clone()
            } else {
                String::new()
            },
            campaigns: checked,
            attachments: session.attachments.clone(),
        };

        self.state.sending = true;
        self.logger.log(format!(
            "App: sending email to '{}' with {} attachment(s), {} campaign(s)",
            email.recipients,
            email.attachments.len(),
            email.campaigns.len()
        ));
        self.task_manager.spawn_send(self.api.clone(), email);
        Action::None
    }

    /// Append files chosen in the attachment dialog. Paths that do not
    /// exist are rejected with an error banner and the dialog stays open.
    fn add_attachments(&mut self, paths: Vec<String>) -> Action {
        for path in &paths {
            if !Path::new(path).is_file() {
                return Action::Notify {
                    message: format!("File not found: {path}"),
                    severity: Severity::Error,
                };
            }
        }

        let count = paths.len();
        self.form.session.add_attachments(paths);
        self.attachments.update_data(self.form.session.attachments.clone());
        self.dialog.reset_attachment_form();
        self.dialog.hide();
        self.logger.log(format!("App: queued {count} attachment(s)"));
        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let main = LayoutManager::main_layout(area);
        let content = LayoutManager::content_layout(main[0], self.picker_width);
        let composer = LayoutManager::composer_layout(content[1], self.attachments.len());

        self.picker.render(f, content[0]);
        self.form.render(f, composer[0]);
        self.attachments.render(f, composer[1]);

        self.banner.render(f, main[1]);
        StatusBar::render(
            f,
            main[2],
            self.state.sending,
            self.state.fetching_campaigns || self.state.fetching_templates,
        );

        // Dialogs draw last, over everything else
        self.dialog.render(f, area);
    }
}
