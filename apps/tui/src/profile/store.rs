//! Local profile cache — a single JSON file standing in for durable storage.
#![allow(dead_code)]
//!
//! Read once at startup, rewritten on every field change. An unreadable or
//! unparseable cache is logged and treated as "no saved data": the form starts
//! empty rather than refusing to launch.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::profile::models::ResumeProfile;

/// Handle on the cache file. Owns the path, not the file — the file only
/// exists between the first save and an explicit reset.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        ProfileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached profile, falling back to an all-empty profile when the
    /// cache is missing or corrupt. Never fails: a bad cache must not prevent
    /// the form from opening.
    pub fn load(&self) -> ResumeProfile {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No profile cache at {}", self.path.display());
                return ResumeProfile::default();
            }
            Err(e) => {
                warn!("Failed to read profile cache {}: {e}", self.path.display());
                return ResumeProfile::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    "Invalid profile cache {} ({e}); starting empty",
                    self.path.display()
                );
                ResumeProfile::default()
            }
        }
    }

    /// Serializes the full profile to the cache file.
    ///
    /// The write goes through a temp file in the same directory and is renamed
    /// into place, so a crash mid-write never leaves a truncated cache.
    pub fn save(&self, profile: &ResumeProfile) -> Result<(), AppError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(profile)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }

    /// Removes the cache file. Missing file is not an error.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
