use mailcaster::ui::components::NotificationBanner;
use mailcaster::ui::core::Severity;
use std::time::{Duration, Instant};

#[test]
fn test_banner_hidden_initially() {
    let banner = NotificationBanner::new();
    assert!(!banner.is_visible());
}

#[test]
fn test_show_sets_message_and_severity() {
    let mut banner = NotificationBanner::new();
    banner.show("Email sent successfully!", Severity::Success);
    assert!(banner.is_visible());
    assert_eq!(banner.message(), "Email sent successfully!");
    assert_eq!(banner.severity(), Severity::Success);
}

#[test]
fn test_banner_expires_after_timeout() {
    let mut banner = NotificationBanner::new();
    let start = Instant::now();
    banner.show_at("hello", Severity::Success, start);

    banner.hide_if_expired_at(start + Duration::from_secs(4));
    assert!(banner.is_visible());

    banner.hide_if_expired_at(start + Duration::from_secs(5));
    assert!(!banner.is_visible());
    assert_eq!(banner.message(), "");
}

#[test]
fn test_later_message_restarts_the_timer() {
    let mut banner = NotificationBanner::new();
    let start = Instant::now();
    banner.show_at("first", Severity::Success, start);

    // Replaced just before expiry; the new message gets its own window
    let replaced_at = start + Duration::from_secs(4);
    banner.show_at("second", Severity::Error, replaced_at);

    banner.hide_if_expired_at(start + Duration::from_secs(6));
    assert!(banner.is_visible());
    assert_eq!(banner.message(), "second");
    assert_eq!(banner.severity(), Severity::Error);

    banner.hide_if_expired_at(replaced_at + Duration::from_secs(5));
    assert!(!banner.is_visible());
}
