mod config;
mod errors;
mod layout;
mod profile;
mod render;
mod state;
mod ui;

use std::fs::File;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::{FormState, ProfileStore};
use crate::state::App;

fn main() -> Result<()> {
    // Load configuration first (all keys optional, defaults apply)
    let config = Config::from_env()?;
    std::fs::create_dir_all(&config.data_dir)?;

    // Initialize structured logging. Output goes to a file because the TUI
    // owns the terminal.
    let log_file = File::create(config.log_path())?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    info!("Starting resume studio v{}", env!("CARGO_PKG_VERSION"));
    info!("Profile cache: {}", config.cache_path().display());
    info!("Export directory: {}", config.export_dir.display());

    // Restore the cached profile (empty on first launch or corrupt cache)
    let store = ProfileStore::new(config.cache_path());
    let form = FormState::load(store);

    let mut app = App::new(config, form);
    ui::run(&mut app)?;

    info!("Exiting");
    Ok(())
}
