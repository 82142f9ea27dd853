//! Wire types for the mass-mailer backend.
//!
//! Field names mirror the server's JSON exactly (`campaignName`, `Title`,
//! ...), so every struct carries explicit `serde` renames rather than a
//! blanket rename-all.

use serde::{Deserialize, Serialize};

/// Response of `GET /campaigns/list`. A `campaigns` field that is not an
/// array fails deserialization and is reported as a malformed response.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<String>,
}

/// Body of `POST /campaigns`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCampaignRequest {
    #[serde(rename = "campaignName")]
    pub campaign_name: String,
    #[serde(rename = "mailingList")]
    pub mailing_list: Vec<String>,
}

/// Body of `POST /templates`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveTemplateRequest {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
}

/// A stored email template. Titles are optional on the wire; display code
/// substitutes a placeholder label.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Template {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Content", default)]
    pub content: String,
}

/// Response of `GET /templates`. The object-wrapped shape is the documented
/// contract; a bare array is rejected as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
}

/// The server encodes its success flag inconsistently: booleans in some
/// handlers, the strings `"true"`/`"false"` in others. Both encodings
/// deserialize into this enum.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SuccessFlag {
    Bool(bool),
    Text(String),
    #[default]
    #[serde(skip)]
    Missing,
}

impl SuccessFlag {
    /// `true` for boolean `true` or the string `"true"`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            SuccessFlag::Bool(b) => *b,
            SuccessFlag::Text(s) => s == "true",
            SuccessFlag::Missing => false,
        }
    }

    /// Strict check used by the template save path: only the string
    /// `"true"` counts.
    #[must_use]
    pub fn is_true_string(&self) -> bool {
        matches!(self, SuccessFlag::Text(s) if s == "true")
    }
}

/// Generic mutation response: `{"success": ..., "message": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: SuccessFlag,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body carried by non-2xx responses: `{"message": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}
