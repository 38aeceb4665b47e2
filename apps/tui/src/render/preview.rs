//! On-screen preview layout.
//!
//! Produces a UI-agnostic description of the rendered resume: a header
//! (always present, with placeholders for empty fields) and two columns of
//! conditional sections. The terminal view draws this; the PDF exporter
//! renders the same content with its own geometry.

use crate::profile::ResumeProfile;
use crate::render::CONTENT_SECTIONS;

/// One labeled content block, shown only when its value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: String,
}

/// The full preview: header lines plus two columns of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub left: Vec<Section>,
    pub right: Vec<Section>,
}

/// Normalizes a LinkedIn field value into a URL: values already starting
/// with `http` pass through, anything else is treated as a username.
pub fn linkedin_url(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://linkedin.com/in/{value}")
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Builds the preview for the current profile.
///
/// The header always renders (empty fields fall back to placeholder text);
/// only the six content sections are conditional.
pub fn build_preview(profile: &ResumeProfile) -> Preview {
    let linkedin = if profile.linkedin.is_empty() {
        "LinkedIn Profile".to_string()
    } else {
        linkedin_url(&profile.linkedin)
    };

    let contact = format!(
        "{} | {} | {}",
        or_placeholder(&profile.email, "email@example.com"),
        or_placeholder(&profile.phone, "Phone Number"),
        linkedin,
    );

    let sections = |range: std::ops::Range<usize>| {
        CONTENT_SECTIONS[range]
            .iter()
            .filter(|(field, _)| !profile.get(*field).is_empty())
            .map(|(field, title)| Section {
                title,
                body: profile.get(*field).to_string(),
            })
            .collect()
    };

    Preview {
        name: or_placeholder(&profile.name, "Your Name"),
        role: or_placeholder(&profile.role, "Your Role"),
        contact,
        left: sections(0..3),
        right: sections(3..6),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_renders_header_and_no_sections() {
        let mut profile = ResumeProfile::default();
        profile.name = "Jane Doe".to_string();
        profile.email = "jane@x.com".to_string();

        let preview = build_preview(&profile);
        assert_eq!(preview.name, "Jane Doe");
        assert_eq!(
            preview.contact,
            "jane@x.com | Phone Number | LinkedIn Profile"
        );
        assert!(preview.left.is_empty(), "no section headings for empty fields");
        assert!(preview.right.is_empty());
    }

    #[test]
    fn test_empty_profile_uses_placeholders() {
        let preview = build_preview(&ResumeProfile::default());
        assert_eq!(preview.name, "Your Name");
        assert_eq!(preview.role, "Your Role");
        assert_eq!(
            preview.contact,
            "email@example.com | Phone Number | LinkedIn Profile"
        );
    }

    #[test]
    fn test_sections_split_across_columns_in_order() {
        let mut profile = ResumeProfile::default();
        profile.summary = "Engineer".to_string();
        profile.languages = "English".to_string();
        profile.skills = "Rust".to_string();
        profile.passion = "Compilers".to_string();

        let preview = build_preview(&profile);
        let left: Vec<&str> = preview.left.iter().map(|s| s.title).collect();
        let right: Vec<&str> = preview.right.iter().map(|s| s.title).collect();
        assert_eq!(left, vec!["Summary", "Languages"]); // Education omitted
        assert_eq!(right, vec!["Skills", "Passion"]); // Key Achievements omitted
    }

    #[test]
    fn test_linkedin_username_becomes_profile_url() {
        let mut profile = ResumeProfile::default();
        profile.linkedin = "janedoe".to_string();
        let preview = build_preview(&profile);
        assert!(
            preview.contact.ends_with("https://linkedin.com/in/janedoe"),
            "contact was: {}",
            preview.contact
        );
    }

    #[test]
    fn test_linkedin_full_url_passes_through() {
        assert_eq!(
            linkedin_url("https://linkedin.com/in/janedoe"),
            "https://linkedin.com/in/janedoe"
        );
        assert_eq!(linkedin_url("janedoe"), "https://linkedin.com/in/janedoe");
    }
}
