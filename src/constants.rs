//! Constants used throughout the application
//!
//! This module centralizes user-facing messages, UI text, and layout values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_EMAIL_SENT: &str = "Email sent successfully!";
pub const SUCCESS_CAMPAIGN_CREATED: &str = "Campaign created successfully!";
pub const SUCCESS_TEMPLATE_SAVED: &str = "Template saved successfully!";

// Error Messages
pub const ERROR_CAMPAIGN_CREATE: &str = "Error creating campaign.";
pub const ERROR_TEMPLATE_SAVE: &str = "Error saving template.";
pub const ERROR_TEMPLATE_LOAD: &str = "Error loading templates.";
pub const ERROR_EMAIL_SEND: &str = "Error sending email.";

// Validation Error Messages
pub const ERROR_NO_RECIPIENT_SOURCE: &str = "Please provide at least one recipient or campaign.";
pub const ERROR_INVALID_RECIPIENTS: &str = "Invalid email format. Use comma-separated valid emails.";
pub const ERROR_EMPTY_SUBJECT: &str = "Please enter a subject";
pub const ERROR_EMPTY_BODY: &str = "Please enter an email body";
pub const ERROR_CAMPAIGN_FORM: &str = "Please enter a campaign name and valid mailing list.";
pub const ERROR_TEMPLATE_FORM: &str = "Please enter a template name and content.";

// Placeholder label for templates saved without a title
pub const UNTITLED_TEMPLATE: &str = "(untitled)";

/// How long the notification banner stays visible
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 5;

// UI Layout Constants
/// Minimum picker sidebar width in columns
pub const PICKER_MIN_WIDTH: u16 = 15;
/// Maximum picker sidebar width in columns
pub const PICKER_MAX_WIDTH: u16 = 50;
/// Default picker sidebar width in columns
pub const PICKER_DEFAULT_WIDTH: u16 = 30;
