//! Text shown in the status bar for the current image.

use crate::file_utils;
use crate::state::image_view::{ImageStatus, Zoom};
use chrono::{DateTime, Local};
use std::fs;

/// Renders an [`ImageStatus`] into status bar sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    sections: Vec<String>,
    error: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the sections from `status`. `position` is the 0-based index
    /// and the listing length.
    pub fn update(&mut self, status: &ImageStatus, position: Option<(usize, usize)>) {
        self.sections.clear();
        self.error = None;

        let Some(path) = &status.path else {
            return;
        };

        self.sections.push(file_utils::display_name(path));
        if let Some((width, height)) = status.dimensions {
            self.sections.push(format!("{} × {}", width, height));
        }
        self.sections.push(match status.zoom {
            Zoom::Fit => "Fit".to_string(),
            Zoom::Percent(percent) => format!("{}%", percent),
        });
        if status.rotation.degrees() != 0 {
            self.sections.push(format!("{}°", status.rotation.degrees()));
        }
        if let Some((index, total)) = position {
            self.sections.push(format!("{}/{}", index + 1, total));
        }
        if let Ok(meta) = fs::metadata(path) {
            self.sections.push(format_file_size(meta.len()));
            if let Ok(modified) = meta.modified() {
                let modified: DateTime<Local> = modified.into();
                self.sections
                    .push(modified.format("%Y-%m-%d %H:%M").to_string());
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn text(&self) -> String {
        self.sections.join("  |  ")
    }
}

/// Formats a byte count with binary units.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::image_view::Rotation;
    use std::path::PathBuf;

    #[test]
    fn empty_status_renders_nothing() {
        let mut bar = StatusBar::new();
        bar.update(&ImageStatus::default(), None);
        assert_eq!(bar.text(), "");
    }

    #[test]
    fn status_lists_name_size_zoom_rotation_and_position() {
        let mut bar = StatusBar::new();
        let status = ImageStatus {
            path: Some(PathBuf::from("/nonexistent/photo.png")),
            dimensions: Some((800, 600)),
            zoom: Zoom::Percent(150),
            rotation: Rotation::Deg90,
        };

        bar.update(&status, Some((1, 4)));

        assert_eq!(bar.text(), "photo.png  |  800 × 600  |  150%  |  90°  |  2/4");
    }

    #[test]
    fn update_clears_previous_error() {
        let mut bar = StatusBar::new();
        bar.set_error("boom".to_string());
        bar.update(&ImageStatus::default(), None);
        assert_eq!(bar.error(), None);
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KiB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
