//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: dialogs (file pickers, delete confirmation) that must run on the main thread
//! - `rayon::spawn`: CPU-heavy work (image decoding, encoding on save)
//! - `slint::invoke_from_event_loop`: hands rayon results back to the UI thread

pub mod handlers;
pub mod image_display;
mod keys;
mod preferences_window;
mod state_helpers;

pub use handlers::{UiContext, setup_handlers};
pub use state_helpers::*;
