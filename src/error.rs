//! Unified error types for the image viewer application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error encoding or writing an image file
    ImageSave(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
    /// Error reading or writing the preferences file
    PreferencesIo(String),
    /// Preferences file could not be parsed or serialized
    PreferencesFormat(String),
    /// Error removing an image from disk
    Delete(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::ImageSave(msg) => write!(f, "Image save error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::PreferencesIo(msg) => write!(f, "Preferences I/O error: {}", msg),
            AppError::PreferencesFormat(msg) => write!(f, "Preferences format error: {}", msg),
            AppError::Delete(msg) => write!(f, "Delete error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::PreferencesFormat(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::PreferencesFormat(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
