use mailcaster::compose::{Attachment, ComposeSession, DraftIssue, ScheduleChoice};

fn valid_session() -> ComposeSession {
    let mut session = ComposeSession::new();
    session.recipients = "a@example.com".to_string();
    session.subject = "Hello".to_string();
    session.body = "<p>Body</p>".to_string();
    session
}

#[test]
fn test_validation_passes_for_complete_draft() {
    assert!(valid_session().validate(&[]).is_ok());
}

#[test]
fn test_validation_order_stops_at_first_failure() {
    let mut session = ComposeSession::new();

    // No recipients and no campaigns
    assert_eq!(session.validate(&[]), Err(DraftIssue::NoRecipientSource));

    // Recipients present but malformed
    session.recipients = "not-an-email".to_string();
    assert_eq!(session.validate(&[]), Err(DraftIssue::InvalidRecipients));

    // Valid recipients, missing subject
    session.recipients = "a@example.com".to_string();
    assert_eq!(session.validate(&[]), Err(DraftIssue::EmptySubject));

    // Subject present, missing body
    session.subject = "Hi".to_string();
    assert_eq!(session.validate(&[]), Err(DraftIssue::EmptyBody));

    session.body = "<p>text</p>".to_string();
    assert!(session.validate(&[]).is_ok());
}

#[test]
fn test_checked_campaigns_satisfy_recipient_source() {
    let mut session = valid_session();
    session.recipients.clear();

    assert_eq!(session.validate(&[]), Err(DraftIssue::NoRecipientSource));
    assert!(session.validate(&["Launch".to_string()]).is_ok());
}

#[test]
fn test_manual_recipients_still_validated_with_campaigns_checked() {
    let mut session = valid_session();
    session.recipients = "broken".to_string();

    let campaigns = vec!["Launch".to_string()];
    assert_eq!(session.validate(&campaigns), Err(DraftIssue::InvalidRecipients));
}

#[test]
fn test_markup_only_body_is_empty() {
    let mut session = valid_session();
    session.body = "<p><br></p>".to_string();
    assert_eq!(session.validate(&[]), Err(DraftIssue::EmptyBody));
}

#[test]
fn test_attachments_append_and_remove_in_order() {
    let mut session = ComposeSession::new();
    session.add_attachments(["/tmp/a.pdf", "/tmp/b.pdf"]);
    session.add_attachments(["/tmp/c.pdf"]);

    let names: Vec<&str> = session.attachments.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);

    let removed = session.remove_attachment(1);
    assert_eq!(removed.map(|a| a.file_name), Some("b.pdf".to_string()));

    let names: Vec<&str> = session.attachments.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "c.pdf"]);

    // Out-of-range removal is a no-op
    assert!(session.remove_attachment(5).is_none());
    assert_eq!(session.attachments.len(), 2);
}

#[test]
fn test_attachment_file_name_from_path() {
    let a = Attachment::from_path("/some/dir/report.pdf");
    assert_eq!(a.file_name, "report.pdf");
}

#[test]
fn test_load_template_replaces_body() {
    let mut session = valid_session();
    session.load_template("<h1>Template</h1>");
    assert_eq!(session.body, "<h1>Template</h1>");
    // Other fields are untouched
    assert_eq!(session.subject, "Hello");
}

#[test]
fn test_schedule_disclosure() {
    let mut session = ComposeSession::new();
    assert!(!session.custom_schedule_visible());

    session.toggle_schedule_panel();
    assert!(!session.custom_schedule_visible()); // still "now"

    session.schedule = ScheduleChoice::Custom;
    assert!(session.custom_schedule_visible());

    session.toggle_schedule_panel();
    assert!(!session.custom_schedule_visible());
}

#[test]
fn test_schedule_form_values() {
    assert_eq!(ScheduleChoice::Now.form_value(), "now");
    assert_eq!(ScheduleChoice::Custom.form_value(), "custom");
    assert_eq!(ScheduleChoice::Now.next(), ScheduleChoice::Custom);
    assert_eq!(ScheduleChoice::Custom.next(), ScheduleChoice::Now);
}

#[test]
fn test_reset_after_send_clears_everything() {
    let mut session = valid_session();
    session.add_attachments(["/tmp/a.pdf"]);
    session.toggle_schedule_panel();
    session.schedule = ScheduleChoice::Custom;
    session.custom_schedule = "2026-01-01 09:00".to_string();

    session.reset_after_send();

    assert!(session.recipients.is_empty());
    assert!(session.subject.is_empty());
    assert!(session.body.is_empty());
    assert!(session.attachments.is_empty());
    assert!(session.custom_schedule.is_empty());
    assert_eq!(session.schedule, ScheduleChoice::Now);
    assert!(!session.schedule_open);
}
