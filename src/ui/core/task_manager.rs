//! Background task management for network operations.
//!
//! Every backend call runs as a spawned tokio task; completion is reported
//! back to the UI loop over an unbounded action channel, so handlers never
//! block the event loop. Requests are not cancellable once issued.

use super::actions::Action;
use crate::api::client::OutgoingEmail;
use crate::api::{ApiClient, ApiError};
use crate::constants::ERROR_EMAIL_SEND;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<F>(&mut self, description: String, fut: F) -> TaskId
    where
        F: std::future::Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = fut.await;
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Fetch the campaign name list.
    pub fn spawn_campaign_fetch(&mut self, client: ApiClient) -> TaskId {
        self.spawn("Fetch campaigns".to_string(), async move {
            match client.list_campaigns().await {
                Ok(names) => Action::CampaignsLoaded(names),
                Err(e) => Action::CampaignsFetchFailed(e.to_string()),
            }
        })
    }

    /// Create a new campaign with its mailing list.
    pub fn spawn_campaign_create(&mut self, client: ApiClient, name: String, mailing_list: Vec<String>) -> TaskId {
        self.spawn(format!("Create campaign '{name}'"), async move {
            match client.create_campaign(&name, mailing_list).await {
                Ok(status) => Action::CampaignCreated(status),
                Err(ApiError::Server(message)) => Action::CampaignCreateFailed {
                    message,
                    transport: false,
                },
                Err(e) => Action::CampaignCreateFailed {
                    message: e.to_string(),
                    transport: true,
                },
            }
        })
    }

    /// Fetch the stored templates.
    pub fn spawn_template_fetch(&mut self, client: ApiClient) -> TaskId {
        self.spawn("Fetch templates".to_string(), async move {
            match client.list_templates().await {
                Ok(templates) => Action::TemplatesLoaded(templates),
                Err(e) => Action::TemplatesFetchFailed(e.to_string()),
            }
        })
    }

    /// Save a new template.
    pub fn spawn_template_save(&mut self, client: ApiClient, title: String, content: String) -> TaskId {
        self.spawn(format!("Save template '{title}'"), async move {
            match client.save_template(&title, &content).await {
                Ok(status) => Action::TemplateSaved(status),
                Err(ApiError::Server(message)) => Action::TemplateSaveFailed {
                    message,
                    transport: false,
                },
                Err(e) => Action::TemplateSaveFailed {
                    message: e.to_string(),
                    transport: true,
                },
            }
        })
    }

    /// Submit the composed email. Server messages surface verbatim; every
    /// other failure collapses into the generic send error.
    pub fn spawn_send(&mut self, client: ApiClient, email: OutgoingEmail) -> TaskId {
        self.spawn("Send email".to_string(), async move {
            match client.send_email(email).await {
                Ok(status) => Action::SendFinished(status),
                Err(ApiError::Server(message)) => Action::SendFailed { message },
                Err(e) => {
                    log::error!("send failed: {e}");
                    Action::SendFailed {
                        message: ERROR_EMAIL_SEND.to_string(),
                    }
                }
            }
        })
    }

    /// Drop finished tasks from the registry.
    pub fn cleanup_finished_tasks(&mut self) {
        self.tasks.retain(|_, task| !task.handle.is_finished());
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_sending(&self) -> bool {
        self.tasks.values().any(|task| task.description == "Send email")
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
