//! Per-field validation rules.
//!
//! Rules are advisory: an error never blocks typing, it only blocks export.
//! Empty values never error — required-ness is checked separately by
//! `FormState::is_valid`, so a cleared field always validates clean.

use crate::profile::models::Field;

pub const EMAIL_ERROR: &str = "Invalid email format";
pub const PHONE_ERROR: &str = "Invalid phone number";
pub const LINKEDIN_ERROR: &str = "Please enter a valid LinkedIn link (include linkedin.com)";

/// Validates a single field value. Returns `None` when the value is acceptable.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match field {
        Field::Email if !is_valid_email(value) => Some(EMAIL_ERROR.to_string()),
        Field::Phone if !is_valid_phone(value) => Some(PHONE_ERROR.to_string()),
        Field::Linkedin if !value.to_lowercase().contains("linkedin.com") => {
            Some(LINKEDIN_ERROR.to_string())
        }
        _ => None,
    }
}

/// Email shape check: `local@domain`, no whitespace, exactly one `@` with a
/// non-empty local part, and a `.` inside the domain with characters on both
/// sides. Deliberately permissive beyond that — this is a typo catcher, not
/// an RFC 5321 parser.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character before and after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Phone check: optional leading `+`, then 7–15 ASCII digits, nothing else.
fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
