//! Application configuration constants.

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 4] = ["bmp", "jpg", "jpeg", "png"];

/// Extensions offered by the open / save dialogs.
pub const DIALOG_FILTER_EXTENSIONS: [&str; 3] = ["bmp", "jpg", "png"];

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "slint-image-viewer";

/// File name of the persisted preferences inside the config dir.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Base window title; the current file name is appended after a dash.
pub const WINDOW_TITLE: &str = "Image Viewer";

/// Zoom bounds in percent.
pub const MIN_ZOOM_PERCENT: i32 = 1;
pub const MAX_ZOOM_PERCENT: i32 = 3200;

/// Number of decoded images kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 10;

/// Shortest slideshow tick; a stored timeout of 0 runs at this rate.
pub const MIN_SLIDESHOW_INTERVAL: std::time::Duration = std::time::Duration::from_millis(250);

/// Initial window size as a percentage of the screen it opens on.
pub const INITIAL_WIDTH_PERCENT: u32 = 75;
pub const INITIAL_HEIGHT_PERCENT: u32 = 75;
