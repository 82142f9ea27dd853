//! Action definitions and UI state transitions.

use crate::api::models::{StatusResponse, Template};

/// Banner severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Form,
    Attachments,
    Picker,
}

impl PaneFocus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PaneFocus::Form => PaneFocus::Attachments,
            PaneFocus::Attachments => PaneFocus::Picker,
            PaneFocus::Picker => PaneFocus::Form,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            PaneFocus::Form => PaneFocus::Picker,
            PaneFocus::Attachments => PaneFocus::Form,
            PaneFocus::Picker => PaneFocus::Attachments,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrevious,

    // Form operations
    SendEmail,
    CreateCampaign { name: String, mailing_list: Vec<String> },
    SaveTemplate { title: String, content: String },
    FetchCampaigns,
    FetchTemplates,
    AddAttachments(Vec<String>),
    RemoveAttachment(usize),
    UseTemplate { content: String },

    // Background completions
    CampaignsLoaded(Vec<String>),
    CampaignsFetchFailed(String),
    TemplatesLoaded(Vec<Template>),
    TemplatesFetchFailed(String),
    CampaignCreated(StatusResponse),
    CampaignCreateFailed { message: String, transport: bool },
    TemplateSaved(StatusResponse),
    TemplateSaveFailed { message: String, transport: bool },
    SendFinished(StatusResponse),
    SendFailed { message: String },

    // UI operations
    Notify { message: String, severity: Severity },
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    CampaignCreation,
    TemplateBrowser,
    TemplateCreation,
    AttachmentAdd,
    Help,
    Logs,
}
