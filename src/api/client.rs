//! Reqwest-based client for the campaign backend.

use super::models::{
    CampaignListResponse, CreateCampaignRequest, ErrorMessage, SaveTemplateRequest, StatusResponse,
    Template, TemplateListResponse,
};
use super::ApiError;
use crate::compose::Attachment;
use std::collections::HashSet;
use std::time::Duration;

/// Everything the composer submits with one send.
#[derive(Debug, Clone, Default)]
pub struct OutgoingEmail {
    pub recipients: String,
    pub subject: String,
    pub body: String,
    pub schedule: String,
    pub custom_schedule: String,
    /// Checked campaign names, in fetched order.
    pub campaigns: Vec<String>,
    pub attachments: Vec<Attachment>,
}

/// HTTP client for the mass-mailer backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /campaigns/list`. A non-2xx status or a response without a
    /// `campaigns` array is an error; callers degrade to an empty list.
    pub async fn list_campaigns(&self) -> Result<Vec<String>, ApiError> {
        let response = self.http.get(self.url("/campaigns/list")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Server(format!(
                "failed to fetch campaigns: {}",
                response.status()
            )));
        }
        let body: CampaignListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(body.campaigns)
    }

    /// `POST /campaigns` with the campaign name and its mailing list.
    pub async fn create_campaign(
        &self,
        name: &str,
        mailing_list: Vec<String>,
    ) -> Result<StatusResponse, ApiError> {
        let request = CreateCampaignRequest {
            campaign_name: name.to_string(),
            mailing_list,
        };
        let response = self.http.post(self.url("/campaigns")).json(&request).send().await?;
        Self::read_status(response).await
    }

    /// `GET /templates`, object-wrapped contract.
    pub async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        let response = self.http.get(self.url("/templates")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Server(format!(
                "failed to fetch templates: {}",
                response.status()
            )));
        }
        let body: TemplateListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(body.templates)
    }

    /// `POST /templates` with a new title + content pair.
    pub async fn save_template(&self, title: &str, content: &str) -> Result<StatusResponse, ApiError> {
        let request = SaveTemplateRequest {
            title: title.to_string(),
            content: content.to_string(),
        };
        let response = self.http.post(self.url("/templates")).json(&request).send().await?;
        Self::read_status(response).await
    }

    /// `POST /composer` as a multipart form: recipients, subject, body,
    /// schedule fields, the comma-joined campaign names (only when any are
    /// checked), and every queued attachment file.
    pub async fn send_email(&self, email: OutgoingEmail) -> Result<StatusResponse, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("recipients", email.recipients)
            .text("subject", email.subject)
            .text("body", email.body)
            .text("schedule", email.schedule)
            .text("custom_schedule", email.custom_schedule);

        if !email.campaigns.is_empty() {
            form = form.text("campaigns", email.campaigns.join(","));
        }

        // The server keys uploads by filename, so duplicate names would
        // clobber each other. First occurrence wins.
        let mut seen = HashSet::new();
        for attachment in email.attachments {
            if !seen.insert(attachment.file_name.clone()) {
                continue;
            }
            let bytes = tokio::fs::read(&attachment.path).await.map_err(|e| {
                ApiError::Attachment(format!("{}: {}", attachment.path.display(), e))
            })?;
            let part = reqwest::multipart::Part::bytes(bytes).file_name(attachment.file_name);
            form = form.part("attachments[]", part);
        }

        let response = self.http.post(self.url("/composer")).multipart(form).send().await?;
        Self::read_status(response).await
    }

    /// Decode a mutation response, mapping non-2xx statuses to the
    /// server-provided `{"message"}` when one is present.
    async fn read_status(response: reqwest::Response) -> Result<StatusResponse, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorMessage>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("request failed: {status}"));
            return Err(ApiError::Server(message));
        }
        response
            .json::<StatusResponse>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}
