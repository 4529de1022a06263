//! Preferences dialog window.
//!
//! The Slint window edits strings and indices; [`PreferencesDialog`] holds
//! the typed copy that is written back to the preferences on OK.

use crate::preferences::{SortBy, SortOrder};
use crate::state::PreferencesDialog;
use crate::ui::UiContext;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

fn to_slint_color(text: &str) -> Option<slint::Color> {
    text.parse::<crate::preferences::Color>()
        .ok()
        .map(|color| slint::Color::from_rgb_u8(color.r, color.g, color.b))
}

/// Copies the dialog state into the window fields.
fn write_fields(window: &crate::PreferencesWindow, dialog: &PreferencesDialog) {
    window.set_bg_color_view(dialog.display.bg_color_view.to_string().into());
    window.set_bg_color_slideshow(dialog.display.bg_color_slideshow.to_string().into());
    refresh_swatches(window);

    window.set_sort_by_index(match dialog.control.sort_by {
        SortBy::Date => 0,
        SortBy::FileName => 1,
    });
    window.set_sort_order_index(match dialog.control.sort_order {
        SortOrder::Ascending => 0,
        SortOrder::Descending => 1,
    });
    window.set_zoom_step(dialog.control.zoom_step);
    window.set_key_next_image(dialog.control.key_next_image.as_str().into());
    window.set_key_previous_image(dialog.control.key_previous_image.as_str().into());

    window.set_timeout(i32::try_from(dialog.slideshow.timeout).unwrap_or(i32::MAX));
}

/// Reads the window fields back. Unparsable colors keep their old value.
fn read_fields(window: &crate::PreferencesWindow, dialog: &mut PreferencesDialog) {
    PreferencesDialog::set_color_text(
        &mut dialog.display.bg_color_view,
        &window.get_bg_color_view(),
    );
    PreferencesDialog::set_color_text(
        &mut dialog.display.bg_color_slideshow,
        &window.get_bg_color_slideshow(),
    );

    dialog.control.sort_by = if window.get_sort_by_index() == 0 {
        SortBy::Date
    } else {
        SortBy::FileName
    };
    dialog.control.sort_order = if window.get_sort_order_index() == 0 {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    dialog.control.zoom_step = window.get_zoom_step();
    dialog.control.key_next_image = window.get_key_next_image().trim().to_string();
    dialog.control.key_previous_image = window.get_key_previous_image().trim().to_string();

    dialog.slideshow.timeout = u32::try_from(window.get_timeout()).unwrap_or(0);
}

fn refresh_swatches(window: &crate::PreferencesWindow) {
    if let Some(color) = to_slint_color(&window.get_bg_color_view()) {
        window.set_view_swatch(color);
    }
    if let Some(color) = to_slint_color(&window.get_bg_color_slideshow()) {
        window.set_slideshow_swatch(color);
    }
}

fn hide(ctx: &UiContext) {
    if let Some(window) = ctx.preferences_window.borrow().as_ref() {
        let _ = window.hide();
    }
}

/// Opens the preferences window loaded with `dialog`.
///
/// OK applies and persists through the main window; Cancel leaves the
/// preferences untouched; Reset restores the built-in defaults in the
/// fields only.
pub fn show(ctx: &UiContext, dialog: PreferencesDialog) {
    hide(ctx);

    let window = match crate::PreferencesWindow::new() {
        Ok(window) => window,
        Err(e) => {
            ctx.report_error("Failed to open preferences", e.to_string());
            return;
        }
    };
    let dialog = Rc::new(RefCell::new(dialog));
    write_fields(&window, &dialog.borrow());

    window.on_color_edited({
        let handle = window.as_weak();
        move || {
            if let Some(window) = handle.upgrade() {
                refresh_swatches(&window);
            }
        }
    });

    window.on_reset_clicked({
        let handle = window.as_weak();
        let dialog = dialog.clone();
        move || {
            if let Some(window) = handle.upgrade() {
                dialog.borrow_mut().restore_defaults();
                write_fields(&window, &dialog.borrow());
            }
        }
    });

    window.on_ok_clicked({
        let handle = window.as_weak();
        let dialog = dialog.clone();
        let ctx = ctx.clone();
        move || {
            let Some(window) = handle.upgrade() else {
                return;
            };
            read_fields(&window, &mut dialog.borrow_mut());
            let effects = ctx.with_window(|main| main.accept_preferences(&dialog.borrow()));
            ctx.run(effects);
            hide(&ctx);
        }
    });

    window.on_cancel_clicked({
        let ctx = ctx.clone();
        move || hide(&ctx)
    });

    if let Err(e) = window.show() {
        ctx.report_error("Failed to show preferences", e.to_string());
        return;
    }
    *ctx.preferences_window.borrow_mut() = Some(window);
}
