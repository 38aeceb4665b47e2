//! Profile data model — the eleven fixed resume fields and their form metadata.
//!
//! The cache serialization keeps the original camelCase key names
//! (`keyAchievements` etc.) so previously saved profiles remain readable.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Field enum
// ────────────────────────────────────────────────────────────────────────────

/// One of the eleven resume fields, in canonical form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Role,
    Email,
    Phone,
    Linkedin,
    Summary,
    Education,
    Languages,
    Skills,
    KeyAchievements,
    Passion,
}

impl Field {
    /// All fields in form order (top to bottom).
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Role,
        Field::Email,
        Field::Phone,
        Field::Linkedin,
        Field::Summary,
        Field::Education,
        Field::Languages,
        Field::Skills,
        Field::KeyAchievements,
        Field::Passion,
    ];

    /// Form label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Role => "Professional Role",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Linkedin => "LinkedIn (username or URL)",
            Field::Summary => "Professional Summary",
            Field::Education => "Education",
            Field::Languages => "Languages",
            Field::Skills => "Skills",
            Field::KeyAchievements => "Key Achievements",
            Field::Passion => "Passion",
        }
    }

    /// Required fields gate export, never typing.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Email)
    }

    /// Multiline fields accept Enter as a line break in the form.
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Field::Summary
                | Field::Education
                | Field::Languages
                | Field::Skills
                | Field::KeyAchievements
                | Field::Passion
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// The full resume profile. All fields are always present; each may be empty.
///
/// `#[serde(default)]` keeps loading forgiving: a cache written by an older
/// build with missing keys still deserializes, absent fields come back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeProfile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub education: String,
    pub languages: String,
    pub skills: String,
    pub key_achievements: String,
    pub passion: String,
}

impl ResumeProfile {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Role => &self.role,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Linkedin => &self.linkedin,
            Field::Summary => &self.summary,
            Field::Education => &self.education,
            Field::Languages => &self.languages,
            Field::Skills => &self.skills,
            Field::KeyAchievements => &self.key_achievements,
            Field::Passion => &self.passion,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Role => &mut self.role,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Linkedin => &mut self.linkedin,
            Field::Summary => &mut self.summary,
            Field::Education => &mut self.education,
            Field::Languages => &mut self.languages,
            Field::Skills => &mut self.skills,
            Field::KeyAchievements => &mut self.key_achievements,
            Field::Passion => &mut self.passion,
        };
        *slot = value;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_all_empty() {
        let profile = ResumeProfile::default();
        for field in Field::ALL {
            assert_eq!(profile.get(field), "", "{field:?} should default empty");
        }
    }

    #[test]
    fn test_get_set_round_trip_every_field() {
        let mut profile = ResumeProfile::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            profile.set(field, format!("value-{i}"));
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(profile.get(field), format!("value-{i}"));
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut profile = ResumeProfile::default();
        profile.key_achievements = "Shipped v1".to_string();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(
            json.contains("\"keyAchievements\":\"Shipped v1\""),
            "expected camelCase key, got {json}"
        );
        assert!(!json.contains("key_achievements"));
    }

    #[test]
    fn test_deserialize_tolerates_missing_keys() {
        let profile: ResumeProfile =
            serde_json::from_str(r#"{"name":"Jane Doe","email":"jane@x.com"}"#).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@x.com");
        assert_eq!(profile.summary, "");
    }

    #[test]
    fn test_required_fields_are_name_and_email() {
        let required: Vec<Field> = Field::ALL
            .into_iter()
            .filter(Field::is_required)
            .collect();
        assert_eq!(required, vec![Field::Name, Field::Email]);
    }
}
