use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};
use log::{debug, info};
use slint::ComponentHandle;
use std::path::PathBuf;

use crate::config::{INITIAL_HEIGHT_PERCENT, INITIAL_WIDTH_PERCENT};
use crate::file_utils::{self, PathExt};
use crate::ui::UiContext;

fn startup_image_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| file_utils::is_supported_image(path))
}

fn initial_size(screen_width: u32, screen_height: u32) -> (u32, u32) {
    let scale = |length: u32, percent: u32| (u64::from(length) * u64::from(percent) / 100) as u32;
    (
        scale(screen_width, INITIAL_WIDTH_PERCENT),
        scale(screen_height, INITIAL_HEIGHT_PERCENT),
    )
}

/// Sizes the shown window relative to its monitor. Keeps the preferred size
/// from the markup when the monitor is unknown.
pub fn apply_initial_size(app: &crate::AppWindow) {
    let screen = app
        .window()
        .with_winit_window(|window| window.current_monitor().map(|monitor| monitor.size()))
        .flatten();
    let Some(screen) = screen else {
        debug!("Monitor size unavailable, keeping default window size");
        return;
    };

    let (width, height) = initial_size(screen.width, screen.height);
    debug!("Initial window size {}x{}", width, height);
    app.window().set_size(slint::PhysicalSize::new(width, height));
}

/// Opens files dropped onto the window.
fn setup_drop_handler(app: &crate::AppWindow, ctx: &UiContext) {
    let ctx = ctx.clone();
    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::DroppedFile(path) = event {
            if file_utils::is_supported_image(path) {
                info!("Opening dropped file {}", path.format_for_log());
                ctx.open_path(path.clone());
            } else {
                debug!("Ignoring dropped file {}", path.format_for_log());
            }
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, ctx: &UiContext) {
    setup_drop_handler(app, ctx);

    if let Some(path) = startup_image_from_args() {
        info!("Opening startup image {}", path.format_for_log());
        ctx.open_path(path);
    }
}
