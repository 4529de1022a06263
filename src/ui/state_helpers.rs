//! Helper functions that mirror the window state into the Slint globals.
//!
//! Grouped by global so a single call after every state change keeps the
//! whole UI consistent.

use crate::preferences::Color;
use crate::state::AppState;
use crate::state::actions::{ActionKind, MENUS, MenuItem, TOOL_BAR};
use crate::state::image_view::Zoom;
use crate::state::main_window::{MainWindow, UiState};
use log::error;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

fn to_slint_color(color: Color) -> slint::Color {
    slint::Color::from_rgb_u8(color.r, color.g, color.b)
}

fn menu_entry(item: &MenuItem, window: &MainWindow) -> crate::MenuEntry {
    match item {
        MenuItem::Entry(entry) => {
            let checked = window.is_checked(entry.id);
            let mark = match (entry.kind, checked) {
                (ActionKind::Check, true) => "✓",
                (ActionKind::Radio, true) => "●",
                _ => "",
            };
            crate::MenuEntry {
                id: entry.id.into(),
                label: entry.label.into(),
                checked,
                mark: mark.into(),
                separator: false,
            }
        }
        MenuItem::Separator => crate::MenuEntry {
            id: SharedString::default(),
            label: SharedString::default(),
            checked: false,
            mark: SharedString::default(),
            separator: true,
        },
    }
}

fn menu_models(window: &MainWindow) -> Vec<crate::MenuModel> {
    MENUS
        .iter()
        .map(|(title, items)| {
            let entries: Vec<crate::MenuEntry> =
                items.iter().map(|item| menu_entry(item, window)).collect();
            crate::MenuModel {
                title: (*title).into(),
                entries: ModelRc::new(VecModel::from(entries)),
            }
        })
        .collect()
}

/// Toolbar buttons; the slideshow button reads "Pause" while running.
fn tool_bar_model(window: &MainWindow) -> Vec<crate::MenuEntry> {
    TOOL_BAR
        .iter()
        .filter(|item| matches!(item, MenuItem::Entry(_)))
        .map(|item| {
            let mut entry = menu_entry(item, window);
            if entry.id == "slideshow" && window.is_slideshow_running() {
                entry.label = "Pause".into();
            }
            entry
        })
        .collect()
}

/// Sets title, bar visibility, menus and toolbar.
pub fn set_chrome(
    ui: &crate::AppWindow,
    state: &UiState,
    menus: Vec<crate::MenuModel>,
    tool_bar: Vec<crate::MenuEntry>,
) {
    let chrome = ui.global::<crate::ChromeState>();
    chrome.set_title(state.title.as_str().into());
    chrome.set_show_menu_bar(state.chrome.menu_bar);
    chrome.set_show_tool_bar(state.chrome.tool_bar);
    chrome.set_show_status_bar(state.chrome.status_bar);
    chrome.set_menus(ModelRc::new(VecModel::from(menus)));
    chrome.set_tool_bar(ModelRc::new(VecModel::from(tool_bar)));
}

/// Sets background, zoom, image size and status text.
pub fn set_view(ui: &crate::AppWindow, state: &UiState) {
    let view = ui.global::<crate::ViewState>();
    view.set_background(to_slint_color(state.background));
    match state.zoom {
        Zoom::Fit => view.set_fit_to_window(true),
        Zoom::Percent(percent) => {
            view.set_fit_to_window(false);
            view.set_zoom_factor(percent as f32 / 100.0);
        }
    }
    let (width, height) = state.displayed_dimensions.unwrap_or((0, 0));
    view.set_image_width(width as i32);
    view.set_image_height(height as i32);
    view.set_status_text(state.status_text.as_str().into());
    view.set_error_message(state.status_error.clone().unwrap_or_default().into());
}

/// Mirrors the complete window state into the UI.
pub fn sync_ui(ui: &crate::AppWindow, app_state: &AppState) {
    let (state, menus, tool_bar) = {
        let window = app_state.window();
        (window.ui_state(), menu_models(&window), tool_bar_model(&window))
    };
    set_chrome(ui, &state, menus, tool_bar);
    set_view(ui, &state);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and shows it in the status bar until the next status update.
pub fn set_error_with_prefix(ui: &crate::AppWindow, app_state: &AppState, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    app_state.window().report_error(error_message);
    sync_ui(ui, app_state);
}
