//! Persisted user preferences.
//!
//! Stored as TOML under the platform config directory. Every field has a
//! built-in default that is used when the key is missing from the file.

use crate::config::{APP_NAME, PREFERENCES_FILE_NAME};
use crate::error::{AppError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Field the directory listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "date")]
    Date,
    #[default]
    #[serde(rename = "filename")]
    FileName,
}

/// Direction of the listing order ("advanced" sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ascending")]
    Ascending,
    #[serde(rename = "descending")]
    Descending,
}

/// An opaque RGB color, persisted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{}'", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// User settings shared by every window component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub sort_by: SortBy,
    pub sort_by_advanced: SortOrder,
    pub show_menu: bool,
    pub show_tool_bar: bool,
    pub show_status_bar: bool,
    pub bg_color_view: Color,
    pub bg_color_slideshow: Color,
    /// Slideshow interval in seconds.
    pub timeout: u32,
    /// Zoom increment in percent.
    pub zoom_step: i32,
    pub key_next_image: String,
    pub key_previous_image: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sort_by: SortBy::FileName,
            sort_by_advanced: SortOrder::Ascending,
            show_menu: true,
            show_tool_bar: true,
            show_status_bar: true,
            bg_color_view: Color::WHITE,
            bg_color_slideshow: Color::BLACK,
            timeout: 3,
            zoom_step: 10,
            key_next_image: "Right".to_string(),
            key_previous_image: "Left".to_string(),
        }
    }
}

/// Returns the default preferences file location, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFERENCES_FILE_NAME);
        path
    })
}

impl Preferences {
    /// Loads preferences from the default location.
    ///
    /// Never fails: a missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        let Some(path) = default_path() else {
            warn!("No config directory available, using default preferences");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(preferences) => preferences,
            Err(e) => {
                warn!("Falling back to default preferences: {}", e);
                Self::default()
            }
        }
    }

    /// Loads preferences from a specific file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Preferences file {} not found", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::PreferencesIo(e.to_string()))?;
        let stored: toml::Table = toml::from_str(&content)?;
        let preferences = Self::from_table(stored);
        debug!("Loaded preferences from {}", path.display());
        Ok(preferences)
    }

    /// Builds preferences key by key on top of the defaults. A key whose
    /// value does not deserialize keeps its default; the others still apply.
    fn from_table(stored: toml::Table) -> Self {
        let mut merged = match toml::Value::try_from(Self::default()) {
            Ok(toml::Value::Table(table)) => table,
            _ => return Self::default(),
        };

        for (key, value) in stored {
            if !merged.contains_key(&key) {
                debug!("Ignoring unknown preference {}", key);
                continue;
            }
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value);
            match toml::Value::Table(candidate.clone()).try_into::<Self>() {
                Ok(_) => merged = candidate,
                Err(e) => warn!("Invalid value for preference {}, using default: {}", key, e),
            }
        }

        toml::Value::Table(merged).try_into().unwrap_or_default()
    }

    /// Saves preferences to the default location.
    pub fn save(&self) -> Result<()> {
        match default_path() {
            Some(path) => self.save_to_path(&path),
            None => {
                warn!("No config directory available, preferences not saved");
                Ok(())
            }
        }
    }

    /// Saves preferences to a specific file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::PreferencesIo(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| AppError::PreferencesIo(e.to_string()))?;
        debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}
