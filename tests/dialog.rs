use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailcaster::api::models::Template;
use mailcaster::ui::components::DialogComponent;
use mailcaster::ui::core::{Action, Component, DialogType, Severity};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_campaign_form_rejects_empty_fields_locally() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::CampaignCreation);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::Notify { severity, .. } => assert_eq!(severity, Severity::Error),
        other => panic!("expected Notify, got {other:?}"),
    }
    // The dialog stays open for correction
    assert!(dialog.is_visible());
}

#[test]
fn test_campaign_form_submits_trimmed_name_and_split_list() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::CampaignCreation);

    type_text(&mut dialog, "  Launch  ");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "a@x.com, b@y.com,");

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::CreateCampaign { name, mailing_list } => {
            assert_eq!(name, "Launch");
            assert_eq!(mailing_list, vec!["a@x.com", "b@y.com"]);
        }
        other => panic!("expected CreateCampaign, got {other:?}"),
    }
}

#[test]
fn test_template_form_requires_title_and_content() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TemplateCreation);

    type_text(&mut dialog, "Welcome");
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::Notify { severity: Severity::Error, .. }));

    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "<p>Hi</p>");
    // Back to the title field so Enter submits instead of inserting a newline
    dialog.handle_key_events(key(KeyCode::Tab));
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::SaveTemplate { title, content } => {
            assert_eq!(title, "Welcome");
            assert_eq!(content, "<p>Hi</p>");
        }
        other => panic!("expected SaveTemplate, got {other:?}"),
    }
}

#[test]
fn test_template_content_field_accepts_newlines() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TemplateCreation);

    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "line1");
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
    type_text(&mut dialog, "line2");

    assert_eq!(dialog.template_content, "line1\nline2");
}

#[test]
fn test_browser_enter_uses_selected_template() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TemplateBrowser);
    assert!(dialog.templates_loading);

    dialog.set_templates(vec![
        Template {
            title: Some("First".to_string()),
            content: "<p>1</p>".to_string(),
        },
        Template {
            title: None,
            content: "<p>2</p>".to_string(),
        },
    ]);
    assert!(!dialog.templates_loading);

    dialog.handle_key_events(key(KeyCode::Down));
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::UseTemplate { content } => assert_eq!(content, "<p>2</p>"),
        other => panic!("expected UseTemplate, got {other:?}"),
    }
}

#[test]
fn test_browser_enter_on_empty_list_is_noop() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TemplateBrowser);
    dialog.set_templates(Vec::new());

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}

#[test]
fn test_browser_n_opens_template_creation() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TemplateBrowser);
    dialog.set_templates(Vec::new());

    let action = dialog.handle_key_events(key(KeyCode::Char('n')));
    assert!(matches!(action, Action::ShowDialog(DialogType::TemplateCreation)));
}

#[test]
fn test_attachment_form_splits_paths() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::AttachmentAdd);

    type_text(&mut dialog, "/tmp/a.pdf, /tmp/b.pdf");
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::AddAttachments(paths) => assert_eq!(paths, vec!["/tmp/a.pdf", "/tmp/b.pdf"]),
        other => panic!("expected AddAttachments, got {other:?}"),
    }
}

#[test]
fn test_attachment_form_empty_submit_just_closes() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::AttachmentAdd);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::HideDialog));
}

#[test]
fn test_escape_requests_close() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::CampaignCreation);

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
}
