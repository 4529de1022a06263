//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding and encoding,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::file_utils::PathExt;
use crate::image_loader;
use crate::state::{AppState, Effect};
use crate::ui::{set_error_with_prefix, sync_ui};
use image::DynamicImage;
use log::debug;
use slint::ComponentHandle;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Puts `image` on the canvas in the view's current orientation.
fn render(ui: &crate::AppWindow, state: &AppState, image: &DynamicImage) {
    let rotation = state.window().view().rotation();
    let oriented = image_loader::rotated(image, rotation);

    let view_state = ui.global::<crate::ViewState>();
    view_state.set_dynamic_image(image_loader::create_slint_image(&oriented));
    view_state.set_image_loaded(true);
}

/// Shows a decoded image unless the view has moved on to another file.
fn show_decoded(ui: &crate::AppWindow, state: &AppState, path: &Path, image: &DynamicImage) {
    let is_current = state
        .window()
        .image_decoded(path, image.width(), image.height());
    if !is_current {
        debug!("Discarding stale decode of {}", path.format_for_log());
        return;
    }

    render(ui, state, image);
    sync_ui(ui, state);
}

/// Loads an image and displays it.
///
/// This function:
/// 1. Checks the cache first for instant display
/// 2. If cache miss, spawns a rayon thread to decode the image
/// 3. Uses invoke_from_event_loop to return to the UI thread
/// 4. Shows the image, or an error in the status bar
pub fn load_and_display_image(ui: slint::Weak<crate::AppWindow>, state: AppState, path: PathBuf) {
    let cached = state.cache().get(&path);

    if let Some(image) = cached {
        if let Some(ui) = ui.upgrade() {
            show_decoded(&ui, &state, &path, &image);
        }
        preload_next_image(&state);
        return;
    }

    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path).map(Arc::new);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            match result {
                Ok(image) => {
                    state.cache().put(path.clone(), image.clone());
                    show_decoded(&ui, &state, &path, &image);
                    preload_next_image(&state);
                }
                Err(e) => set_error_with_prefix(&ui, &state, "Failed to load image", e.to_string()),
            }
        });
    });
}

/// Redraws the current image, e.g. after a rotation.
///
/// Does nothing while the image is still decoding; the decode finishes with
/// the current rotation.
pub fn render_current(ui: &crate::AppWindow, state: &AppState) {
    let path = state.window().view().file_name().map(PathBuf::from);
    let Some(path) = path else {
        return;
    };

    let cached = state.cache().get(&path);
    if let Some(image) = cached {
        render(ui, state, &image);
    }
}

/// Removes the image from the canvas.
pub fn clear_image(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_loaded(false);
    view_state.set_dynamic_image(slint::Image::default());
}

/// Encodes the displayed image, rotation included, to `target`.
pub fn write_current(ui: slint::Weak<crate::AppWindow>, state: AppState, target: PathBuf) {
    let (path, rotation) = {
        let window = state.window();
        (
            window.view().file_name().map(PathBuf::from),
            window.view().rotation(),
        )
    };
    let cached = path.and_then(|path| state.cache().get(&path));

    let Some(image) = cached else {
        if let Some(ui) = ui.upgrade() {
            set_error_with_prefix(
                &ui,
                &state,
                "Failed to save image",
                "image is not loaded yet".to_string(),
            );
        }
        return;
    };

    rayon::spawn(move || {
        let result = image_loader::save_image(&image_loader::rotated(&image, rotation), &target);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            match result {
                Ok(()) => {
                    state.cache().remove(&target);
                    let rescanned = state.window().image_saved(&target);
                    match rescanned {
                        Ok(effects) => {
                            for effect in effects {
                                if let Effect::LoadImage(path) = effect {
                                    load_and_display_image(ui.as_weak(), state.clone(), path);
                                }
                            }
                            sync_ui(&ui, &state);
                        }
                        Err(e) => {
                            set_error_with_prefix(&ui, &state, "Failed to update directory", e.to_string())
                        }
                    }
                }
                Err(e) => set_error_with_prefix(&ui, &state, "Failed to save image", e.to_string()),
            }
        });
    });
}

/// Decodes the next image of the listing in the background.
fn preload_next_image(state: &AppState) {
    let next_path = state.window().files().peek_next();
    let Some(path) = next_path else {
        return;
    };
    if state.cache().contains(&path) {
        return;
    }

    let state = state.clone();
    rayon::spawn(move || {
        // Silently ignore errors during preload
        if let Ok(image) = image_loader::load_image_blocking(&path) {
            state.cache().put(path, Arc::new(image));
        }
    });
}
