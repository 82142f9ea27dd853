//! Modal dialogs.

pub mod attachment_dialog;
pub mod campaign_creation_dialog;
pub mod common;
pub mod system_dialogs;
pub mod template_browser_dialog;
pub mod template_creation_dialog;
