//! Compose session state.
//!
//! One `ComposeSession` covers the lifetime of a single draft: recipient
//! text, subject, HTML body, the ordered attachment set, and the schedule
//! disclosure. It owns everything the browser version kept in module-level
//! globals, with explicit reset points at session start and after a
//! successful send.

use crate::constants::{
    ERROR_EMPTY_BODY, ERROR_EMPTY_SUBJECT, ERROR_INVALID_RECIPIENTS, ERROR_NO_RECIPIENT_SOURCE,
};
use crate::validation::{validate_emails, visible_text};
use std::path::{Path, PathBuf};

/// When the email should go out. The server currently ignores these fields
/// but they travel with the form like they always did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleChoice {
    #[default]
    Now,
    Custom,
}

impl ScheduleChoice {
    /// Value sent in the `schedule` form field.
    #[must_use]
    pub fn form_value(self) -> &'static str {
        match self {
            ScheduleChoice::Now => "now",
            ScheduleChoice::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScheduleChoice::Now => "Send now",
            ScheduleChoice::Custom => "Custom date/time",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ScheduleChoice::Now => ScheduleChoice::Custom,
            ScheduleChoice::Custom => ScheduleChoice::Now,
        }
    }
}

/// A file queued for upload with the next send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
}

impl Attachment {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, file_name }
    }
}

/// First validation failure of a draft, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    NoRecipientSource,
    InvalidRecipients,
    EmptySubject,
    EmptyBody,
}

impl DraftIssue {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            DraftIssue::NoRecipientSource => ERROR_NO_RECIPIENT_SOURCE,
            DraftIssue::InvalidRecipients => ERROR_INVALID_RECIPIENTS,
            DraftIssue::EmptySubject => ERROR_EMPTY_SUBJECT,
            DraftIssue::EmptyBody => ERROR_EMPTY_BODY,
        }
    }
}

/// State of the email being authored.
#[derive(Debug, Clone, Default)]
pub struct ComposeSession {
    pub recipients: String,
    pub subject: String,
    /// HTML body source. Templates load their stored markup here.
    pub body: String,
    pub attachments: Vec<Attachment>,
    pub schedule_open: bool,
    pub schedule: ScheduleChoice,
    pub custom_schedule: String,
}

impl ComposeSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append newly chosen files to the attachment set. Adding never
    /// replaces what is already queued.
    pub fn add_attachments<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.attachments.push(Attachment::from_path(path));
        }
    }

    /// Remove exactly one attachment by index, preserving the relative
    /// order of the rest.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// Replace the body with a template's stored HTML.
    pub fn load_template(&mut self, content: &str) {
        self.body = content.to_string();
    }

    pub fn toggle_schedule_panel(&mut self) {
        self.schedule_open = !self.schedule_open;
    }

    /// Whether the secondary date/time input is disclosed.
    #[must_use]
    pub fn custom_schedule_visible(&self) -> bool {
        self.schedule_open && self.schedule == ScheduleChoice::Custom
    }

    /// Validate the draft before any network call. Checks run in a fixed
    /// order and stop at the first failure: recipient source, address
    /// format, subject, body.
    pub fn validate(&self, checked_campaigns: &[String]) -> Result<(), DraftIssue> {
        let manual = self.recipients.trim();
        if manual.is_empty() && checked_campaigns.is_empty() {
            return Err(DraftIssue::NoRecipientSource);
        }
        if !manual.is_empty() && !validate_emails(manual) {
            return Err(DraftIssue::InvalidRecipients);
        }
        if self.subject.trim().is_empty() {
            return Err(DraftIssue::EmptySubject);
        }
        if visible_text(&self.body).trim().is_empty() {
            return Err(DraftIssue::EmptyBody);
        }
        Ok(())
    }

    /// Reset after a successful send: body cleared, attachment set emptied,
    /// form fields back to their initial state.
    pub fn reset_after_send(&mut self) {
        self.recipients.clear();
        self.subject.clear();
        self.body.clear();
        self.attachments.clear();
        self.custom_schedule.clear();
        self.schedule = ScheduleChoice::Now;
        self.schedule_open = false;
    }
}
