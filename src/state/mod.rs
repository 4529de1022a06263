//! State management for the image viewer application.

use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod actions;
pub mod file_model;
pub mod image_view;
pub mod main_window;
pub mod preferences_dialog;
pub mod status_bar;

pub use file_model::FileModel;
pub use image_view::ImageView;
pub use main_window::{Effect, MainWindow};
pub use preferences_dialog::PreferencesDialog;
pub use status_bar::StatusBar;

use crate::config::IMAGE_CACHE_CAPACITY;

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub main_window: Arc<Mutex<MainWindow>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
}

impl AppState {
    pub fn new(window: MainWindow) -> Self {
        Self {
            main_window: Arc::new(Mutex::new(window)),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
        }
    }

    /// Locks the window state. A poisoned lock is recovered, the state is
    /// plain data.
    pub fn window(&self) -> MutexGuard<'_, MainWindow> {
        self.main_window
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cache(&self) -> MutexGuard<'_, ImageCache> {
        self.image_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
