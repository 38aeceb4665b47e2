//! Form state — the single owned container for the profile and its
//! per-field validation errors.
//!
//! Every mutation re-validates the touched field and persists the full
//! profile to the cache. Cache write failures are logged and swallowed:
//! typing must never be interrupted by a disk problem.

use std::collections::HashMap;

use tracing::warn;

use crate::profile::models::{Field, ResumeProfile};
use crate::profile::store::ProfileStore;
use crate::profile::validation::validate_field;

pub struct FormState {
    profile: ResumeProfile,
    errors: HashMap<Field, String>,
    store: ProfileStore,
}

impl FormState {
    /// Restores the profile from the cache (empty when absent or corrupt) and
    /// validates every restored field, so a saved bad phone number shows its
    /// error immediately on launch.
    pub fn load(store: ProfileStore) -> Self {
        let profile = store.load();
        let mut errors = HashMap::new();
        for field in Field::ALL {
            if let Some(msg) = validate_field(field, profile.get(field)) {
                errors.insert(field, msg);
            }
        }
        FormState {
            profile,
            errors,
            store,
        }
    }

    pub fn profile(&self) -> &ResumeProfile {
        &self.profile
    }

    pub fn value(&self, field: Field) -> &str {
        self.profile.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Sets one field, re-validates it, and persists the full profile.
    pub fn update_field(&mut self, field: Field, value: String) {
        match validate_field(field, &value) {
            Some(msg) => {
                self.errors.insert(field, msg);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.profile.set(field, value);

        if let Err(e) = self.store.save(&self.profile) {
            warn!("Failed to persist profile cache: {e}");
        }
    }

    /// Restores all fields to empty, drops all errors, and deletes the cache.
    pub fn reset(&mut self) {
        self.profile = ResumeProfile::default();
        self.errors.clear();
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear profile cache: {e}");
        }
    }

    /// True iff the required fields (name, email) are non-empty and no field
    /// has a pending validation error. Gates export only.
    pub fn is_valid(&self) -> bool {
        !self.profile.name.is_empty() && !self.profile.email.is_empty() && self.errors.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_form(dir: &tempfile::TempDir) -> FormState {
        FormState::load(ProfileStore::new(dir.path().join("resumeFormData.json")))
    }

    #[test]
    fn test_fresh_form_is_empty_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let form = empty_form(&dir);
        assert_eq!(*form.profile(), ResumeProfile::default());
        assert!(!form.is_valid(), "empty name/email must block export");
    }

    #[test]
    fn test_name_and_email_make_form_valid() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = empty_form(&dir);
        form.update_field(Field::Name, "Jane Doe".to_string());
        assert!(!form.is_valid(), "email still missing");
        form.update_field(Field::Email, "jane@x.com".to_string());
        assert!(form.is_valid());
    }

    #[test]
    fn test_bad_phone_blocks_export_until_corrected_or_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = empty_form(&dir);
        form.update_field(Field::Name, "Jane Doe".to_string());
        form.update_field(Field::Email, "jane@x.com".to_string());

        form.update_field(Field::Phone, "123".to_string());
        assert!(form.error(Field::Phone).is_some());
        assert!(!form.is_valid());

        form.update_field(Field::Phone, "1234567".to_string());
        assert!(form.error(Field::Phone).is_none());
        assert!(form.is_valid());

        // Clearing the field also clears the error.
        form.update_field(Field::Phone, "123".to_string());
        form.update_field(Field::Phone, String::new());
        assert!(form.is_valid());
    }

    #[test]
    fn test_update_persists_to_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumeFormData.json");
        let mut form = FormState::load(ProfileStore::new(path.clone()));
        form.update_field(Field::Summary, "Builds things".to_string());

        let restored = FormState::load(ProfileStore::new(path));
        assert_eq!(restored.value(Field::Summary), "Builds things");
    }

    #[test]
    fn test_reset_empties_everything_and_removes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumeFormData.json");
        let mut form = FormState::load(ProfileStore::new(path.clone()));
        form.update_field(Field::Name, "Jane Doe".to_string());
        form.update_field(Field::Phone, "123".to_string());
        assert!(path.exists());

        form.reset();
        assert_eq!(*form.profile(), ResumeProfile::default());
        assert!(form.error(Field::Phone).is_none());
        assert!(!path.exists(), "reset must delete the cache file");
    }

    #[test]
    fn test_restored_invalid_field_reports_error_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumeFormData.json");
        let store = ProfileStore::new(path.clone());
        let mut profile = ResumeProfile::default();
        profile.name = "Jane Doe".to_string();
        profile.email = "not-an-email".to_string();
        store.save(&profile).unwrap();

        let form = FormState::load(ProfileStore::new(path));
        assert!(form.error(Field::Email).is_some());
        assert!(!form.is_valid());
    }
}
