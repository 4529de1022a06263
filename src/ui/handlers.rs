//! Event handlers for UI callbacks.
//!
//! Registers the Logic callbacks (activate, key-pressed) and executes the
//! effects the window state hands back, using the appropriate threading
//! model for each one.

use crate::config::{DIALOG_FILTER_EXTENSIONS, MIN_SLIDESHOW_INTERVAL};
use crate::file_utils;
use crate::state::actions::Action;
use crate::state::{AppState, Effect, MainWindow};
use crate::ui::image_display::{clear_image, load_and_display_image, render_current, write_current};
use crate::ui::{keys, preferences_window, set_error_with_prefix, sync_ui};
use log::{debug, warn};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// Handles shared by every UI callback. Lives on the UI thread.
#[derive(Clone)]
pub struct UiContext {
    pub ui: slint::Weak<crate::AppWindow>,
    pub state: AppState,
    slideshow_timer: Rc<Timer>,
    pub(crate) preferences_window: Rc<RefCell<Option<crate::PreferencesWindow>>>,
}

impl UiContext {
    /// Runs `f` with the window state locked. Do not call back into the UI
    /// from inside `f`.
    pub fn with_window<R>(&self, f: impl FnOnce(&mut MainWindow) -> R) -> R {
        f(&mut self.state.window())
    }

    /// Executes `effects` in order, then refreshes the UI.
    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
        if let Some(ui) = self.ui.upgrade() {
            sync_ui(&ui, &self.state);
        }
    }

    /// Opens `path` as if it had been picked in the open dialog.
    pub fn open_path(&self, path: PathBuf) {
        match self.with_window(|window| window.open_image(Some(path))) {
            Ok(effects) => self.run(effects),
            Err(e) => self.report_error("Failed to open image", e.to_string()),
        }
    }

    pub fn report_error(&self, prefix: &str, error: String) {
        if let Some(ui) = self.ui.upgrade() {
            set_error_with_prefix(&ui, &self.state, prefix, error);
        }
    }

    fn run_effect(&self, effect: Effect) {
        debug!("Running {:?}", effect);
        match effect {
            Effect::PromptOpen { directory } => self.prompt_open(directory),
            Effect::PromptSave { suggested } => self.prompt_save(suggested),
            Effect::ConfirmDelete { path, name } => self.confirm_delete(path, name),
            Effect::ShowPreferences(dialog) => preferences_window::show(self, dialog),
            Effect::LoadImage(path) => load_and_display_image(self.ui.clone(), self.state.clone(), path),
            Effect::RenderImage => {
                if let Some(ui) = self.ui.upgrade() {
                    render_current(&ui, &self.state);
                }
            }
            Effect::WriteImage(target) => write_current(self.ui.clone(), self.state.clone(), target),
            Effect::CloseImage => {
                if let Some(ui) = self.ui.upgrade() {
                    clear_image(&ui);
                }
            }
            Effect::StartTimer(interval) => self.start_slideshow_timer(interval),
            Effect::StopTimer => self.slideshow_timer.stop(),
            Effect::SetFullscreen(fullscreen) => {
                if let Some(ui) = self.ui.upgrade() {
                    ui.window().set_fullscreen(fullscreen);
                }
            }
            Effect::Quit => {
                if let Err(e) = slint::quit_event_loop() {
                    warn!("Failed to quit event loop: {}", e);
                }
            }
        }
    }

    /// Restarts the repeating slideshow timer. Ticks are serialized by the
    /// event loop.
    fn start_slideshow_timer(&self, interval: Duration) {
        self.slideshow_timer.stop();
        let interval = interval.max(MIN_SLIDESHOW_INTERVAL);
        let ctx = self.clone();
        self.slideshow_timer
            .start(TimerMode::Repeated, interval, move || {
                let effects = ctx.with_window(MainWindow::slideshow_step);
                ctx.run(effects);
            });
    }

    fn prompt_open(&self, directory: Option<PathBuf>) {
        let ctx = self.clone();
        // AsyncFileDialog must run on the main thread, so no rayon here.
        let _ = slint::spawn_local(async move {
            let mut dialog = AsyncFileDialog::new()
                .set_title("Open Image")
                .add_filter("Images", &DIALOG_FILTER_EXTENSIONS);
            if let Some(directory) = directory {
                dialog = dialog.set_directory(directory);
            }
            let picked = dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf());

            match ctx.with_window(|window| window.open_image(picked)) {
                Ok(effects) => ctx.run(effects),
                Err(e) => ctx.report_error("Failed to open image", e.to_string()),
            }
        });
    }

    fn prompt_save(&self, suggested: PathBuf) {
        let ctx = self.clone();
        let _ = slint::spawn_local(async move {
            let mut dialog = AsyncFileDialog::new()
                .set_title("Save Image")
                .add_filter("Images", &DIALOG_FILTER_EXTENSIONS)
                .set_file_name(file_utils::display_name(&suggested));
            if let Some(directory) = suggested.parent() {
                dialog = dialog.set_directory(directory);
            }
            let picked = dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());

            let effects = ctx.with_window(|window| window.save_image(picked));
            ctx.run(effects);
        });
    }

    fn confirm_delete(&self, path: PathBuf, name: String) {
        let ctx = self.clone();
        let _ = slint::spawn_local(async move {
            let answer = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Delete Image")
                .set_description(format!(
                    "Are you sure you want to send image '{}' to trash?",
                    name
                ))
                .set_buttons(MessageButtons::OkCancel)
                .show()
                .await;
            let confirmed = answer == MessageDialogResult::Ok;

            match ctx.with_window(|window| window.delete_image(&path, confirmed)) {
                Ok(effects) => {
                    if confirmed {
                        ctx.state.cache().remove(&path);
                    }
                    ctx.run(effects);
                }
                Err(e) => ctx.report_error("Failed to delete image", e.to_string()),
            }
        });
    }
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared application state, registers the
/// callbacks, and returns the context used to drive the window from outside
/// (startup file, drag and drop).
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) -> UiContext {
    let ctx = UiContext {
        ui: ui.as_weak(),
        state,
        slideshow_timer: Rc::new(Timer::default()),
        preferences_window: Rc::new(RefCell::new(None)),
    };

    // Menu entries and toolbar buttons
    ui.global::<crate::Logic>().on_activate({
        let ctx = ctx.clone();
        move |id, checked| {
            let Some(action) = Action::from_id(&id, checked) else {
                warn!("Unknown action id: {}", id);
                return;
            };
            let effects = ctx.with_window(|window| window.dispatch(action));
            ctx.run(effects);
        }
    });

    // Keys reaching the image view
    ui.global::<crate::Logic>().on_key_pressed({
        let ctx = ctx.clone();
        move |text| {
            let Some(name) = keys::key_name(&text) else {
                return false;
            };
            let Some(effects) = ctx.with_window(|window| window.handle_key(&name)) else {
                return false;
            };
            ctx.run(effects);
            true
        }
    });

    sync_ui(ui, &ctx.state);
    ctx
}
