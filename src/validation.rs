//! Input validation helpers shared by the composer and the dialogs.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Split comma-separated input into trimmed entries, dropping empties.
/// `"a, ,b,"` yields `["a", "b"]`.
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}

/// Whether a comma-separated recipient string holds at least one address
/// and every entry is a valid email.
#[must_use]
pub fn validate_emails(input: &str) -> bool {
    let entries = split_list(input);
    !entries.is_empty() && entries.iter().all(|entry| is_valid_email(entry))
}

/// Strip HTML tags, leaving only the visible text. Used to decide whether
/// a markup body is actually empty.
#[must_use]
pub fn visible_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_empty_entries() {
        assert_eq!(split_list("a, b ,,c,"), vec!["a", "b", "c"]);
        assert!(split_list("  ,  ,").is_empty());
    }

    #[test]
    fn email_regex_accepts_common_forms() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("user@tld-too-short.x"));
        assert!(!is_valid_email("user@"));
    }

    #[test]
    fn visible_text_strips_tags() {
        assert_eq!(visible_text("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(visible_text("<p><br></p>").trim(), "");
    }
}
