//! Common validation utilities for emails and phone numbers

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email pattern; the mail server has the final word.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex must compile")
});

/// E.164-style phone pattern: optional `+`, no leading zero, up to 15 digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex must compile"));

/// Check whether a string looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check whether a string looks like a valid phone number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Canonical form of an email address: trimmed and lower-cased.
///
/// Uniqueness checks and storage both operate on this form, which is what
/// makes email comparison case-insensitive across the system.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a+tag@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  John.Doe@Example.COM "), "john.doe@example.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("+573001234567"));
        assert!(is_valid_phone("14155552671"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("+0123456789"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("+1"));
    }
}
