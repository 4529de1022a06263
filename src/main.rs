// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod preferences;
mod startup;
mod state;
mod ui;

use preferences::Preferences;
use state::{AppState, MainWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let preferences = Preferences::load();
    let app = AppWindow::new()?;
    let app_state = AppState::new(MainWindow::new(preferences, preferences::default_path()));

    // Setup all UI event handlers
    let ctx = ui::setup_handlers(&app, app_state.clone());
    startup::configure_startup_opening(&app, &ctx);

    app.show()?;
    startup::apply_initial_size(&app);
    app.run()?;

    if let Err(e) = app_state.window().preferences().save() {
        log::error!("Failed to save preferences: {}", e);
    }

    Ok(())
}
