use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key is optional — with no environment set, the app stores its cache
/// under the per-user data directory and exports PDFs to the current directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the profile cache and the log file.
    pub data_dir: PathBuf,
    /// Directory exported PDFs are written to.
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("RESUME_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir()?,
        };

        let export_dir = std::env::var("RESUME_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Config {
            data_dir,
            export_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Path of the profile cache file. The file name matches the storage key
    /// the saved data has always lived under, so existing caches stay readable.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("resumeFormData.json")
    }

    /// Log file path. Logs go to a file because the TUI owns stdout.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("studio.log")
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine a per-user data directory")?;
    Ok(base.join("resume-studio"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path_uses_storage_key_name() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/resume-test"),
            export_dir: PathBuf::from("."),
            rust_log: "info".to_string(),
        };
        assert_eq!(
            config.cache_path(),
            PathBuf::from("/tmp/resume-test/resumeFormData.json")
        );
    }
}
