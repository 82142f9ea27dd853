//! Reusable UI components

pub mod attachment_list;
pub mod campaign_picker;
pub mod compose_form;
pub mod dialog_component;
pub mod dialogs;
pub mod notification;
pub mod status_bar;

// Component exports
pub use attachment_list::AttachmentListComponent;
pub use campaign_picker::CampaignPickerComponent;
pub use compose_form::ComposeFormComponent;
pub use dialog_component::DialogComponent;
pub use notification::NotificationBanner;
pub use status_bar::StatusBar;
