//! Zephyr gallery - every animated control and variant in one window

mod gallery;

use anyhow::Context;
use tracing::{info, warn};
use zephyr::settings::Settings;

use gallery::Gallery;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = load_settings().unwrap_or_else(|e| {
        warn!("Using default settings: {:#}", e);
        Settings::default()
    });

    iced::application(
        move || Gallery::new(settings.clone()),
        Gallery::update,
        Gallery::view,
    )
    .title(Gallery::title)
    .theme(Gallery::theme)
    .antialiasing(true)
    .run()
}

fn load_settings() -> anyhow::Result<Settings> {
    let path = Settings::file_path().context("could not determine config directory")?;
    if !path.exists() {
        return Ok(Settings::default());
    }

    let settings = Settings::load_from_file(&path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    info!(path = %path.display(), "settings loaded");
    Ok(settings)
}
