//! State of the image canvas: current file, zoom, rotation and background.

use crate::config::{MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};
use crate::preferences::Color;
use crate::state::FileModel;
use log::debug;
use std::path::{Path, PathBuf};

/// Clockwise rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// True when width and height trade places.
    pub fn is_sideways(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zoom {
    #[default]
    Fit,
    Percent(i32),
}

/// Snapshot of what the status bar shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageStatus {
    pub path: Option<PathBuf>,
    /// Decoded size before rotation, once known.
    pub dimensions: Option<(u32, u32)>,
    pub zoom: Zoom,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    StatusChanged(ImageStatus),
}

#[derive(Debug)]
pub struct ImageView {
    current: Option<PathBuf>,
    dimensions: Option<(u32, u32)>,
    zoom: Zoom,
    rotation: Rotation,
    bg_color: Color,
    zoom_step: i32,
    events: Vec<ViewEvent>,
}

impl Default for ImageView {
    fn default() -> Self {
        Self {
            current: None,
            dimensions: None,
            zoom: Zoom::Fit,
            rotation: Rotation::Deg0,
            bg_color: Color::WHITE,
            zoom_step: 10,
            events: Vec::new(),
        }
    }
}

impl ImageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `path`. Rotation and zoom start over for every image.
    pub fn load_image(&mut self, path: &Path) {
        debug!("View loading {}", path.display());
        self.current = Some(path.to_path_buf());
        self.dimensions = None;
        self.rotation = Rotation::Deg0;
        self.zoom = Zoom::Fit;
        self.notify_status();
    }

    /// Records the decoded size once the pixels for `path` are available.
    ///
    /// Ignored when the view has since moved on to another file.
    pub fn image_decoded(&mut self, path: &Path, width: u32, height: u32) -> bool {
        if self.current.as_deref() != Some(path) {
            return false;
        }
        self.dimensions = Some((width, height));
        self.notify_status();
        true
    }

    pub fn close_image(&mut self) {
        self.current = None;
        self.dimensions = None;
        self.rotation = Rotation::Deg0;
        self.zoom = Zoom::Fit;
        self.notify_status();
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Advances through `files`. After the view was closed the entry that took
    /// the closed file's place is shown instead of skipping it.
    pub fn next_image(&mut self, files: &mut FileModel) -> Option<PathBuf> {
        let path = if self.has_image() {
            files.next()?
        } else {
            files.current_path()?
        };
        self.load_image(&path);
        Some(path)
    }

    pub fn previous_image(&mut self, files: &mut FileModel) -> Option<PathBuf> {
        let path = files.previous()?;
        self.load_image(&path);
        Some(path)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.counter_clockwise();
        self.notify_status();
    }

    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.clockwise();
        self.notify_status();
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn zoom_fit(&mut self) {
        self.zoom = Zoom::Fit;
        self.notify_status();
    }

    pub fn zoom_original(&mut self) {
        self.zoom = Zoom::Percent(100);
        self.notify_status();
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(self.zoom_step.saturating_neg());
    }

    fn zoom_by(&mut self, delta: i32) {
        let current = match self.zoom {
            Zoom::Fit => 100,
            Zoom::Percent(percent) => percent,
        };
        let next = current
            .saturating_add(delta)
            .clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
        self.zoom = Zoom::Percent(next);
        self.notify_status();
    }

    pub fn zoom_step(&self) -> i32 {
        self.zoom_step
    }

    pub fn set_zoom_step(&mut self, step: i32) {
        self.zoom_step = step;
    }

    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.bg_color = color;
    }

    /// Size of the image as displayed, after rotation.
    pub fn displayed_dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions.map(|(w, h)| {
            if self.rotation.is_sideways() {
                (h, w)
            } else {
                (w, h)
            }
        })
    }

    pub fn status(&self) -> ImageStatus {
        ImageStatus {
            path: self.current.clone(),
            dimensions: self.dimensions,
            zoom: self.zoom,
            rotation: self.rotation,
        }
    }

    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify_status(&mut self) {
        self.events.push(ViewEvent::StatusChanged(self.status()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn four_right_rotations_return_to_start() {
        let mut view = ImageView::new();
        view.load_image(Path::new("a.jpg"));
        let start = view.rotation();

        for _ in 0..4 {
            view.rotate_right();
        }

        assert_eq!(view.rotation(), start);
    }

    #[test]
    fn rotation_wraps_in_both_directions() {
        let mut view = ImageView::new();
        view.rotate_left();
        assert_eq!(view.rotation().degrees(), 270);
        view.rotate_right();
        view.rotate_right();
        assert_eq!(view.rotation().degrees(), 90);
    }

    #[test]
    fn sideways_rotation_swaps_dimensions() {
        let mut view = ImageView::new();
        let path = Path::new("a.jpg");
        view.load_image(path);
        assert!(view.image_decoded(path, 640, 480));

        view.rotate_right();
        assert_eq!(view.displayed_dimensions(), Some((480, 640)));
        view.rotate_right();
        assert_eq!(view.displayed_dimensions(), Some((640, 480)));
    }

    #[test]
    fn stale_decode_is_ignored() {
        let mut view = ImageView::new();
        view.load_image(Path::new("b.jpg"));
        assert!(!view.image_decoded(Path::new("a.jpg"), 10, 10));
        assert_eq!(view.status().dimensions, None);
    }

    #[test]
    fn zoom_steps_from_original_size_and_clamps() {
        let mut view = ImageView::new();
        view.set_zoom_step(25);

        view.zoom_in();
        assert_eq!(view.zoom(), Zoom::Percent(125));

        view.zoom_original();
        for _ in 0..10 {
            view.zoom_out();
        }
        assert_eq!(view.zoom(), Zoom::Percent(MIN_ZOOM_PERCENT));

        view.zoom_fit();
        assert_eq!(view.zoom(), Zoom::Fit);
    }

    #[test]
    fn extreme_zoom_steps_stay_in_bounds() {
        let mut view = ImageView::new();
        view.set_zoom_step(i32::MIN);

        view.zoom_out();
        assert_eq!(view.zoom(), Zoom::Percent(MAX_ZOOM_PERCENT));
        view.zoom_in();
        assert_eq!(view.zoom(), Zoom::Percent(MIN_ZOOM_PERCENT));

        view.set_zoom_step(i32::MAX);
        view.zoom_out();
        assert_eq!(view.zoom(), Zoom::Percent(MIN_ZOOM_PERCENT));
    }

    #[test]
    fn loading_resets_rotation_and_zoom() {
        let mut view = ImageView::new();
        view.rotate_right();
        view.zoom_in();
        view.load_image(Path::new("a.jpg"));

        assert_eq!(view.rotation(), Rotation::Deg0);
        assert_eq!(view.zoom(), Zoom::Fit);
    }

    #[test]
    fn every_visible_change_emits_status() {
        let mut view = ImageView::new();
        view.load_image(Path::new("a.jpg"));
        view.rotate_right();
        view.zoom_original();

        let events = view.drain_events();
        assert_eq!(events.len(), 3);
        let ViewEvent::StatusChanged(last) = events.last().unwrap();
        assert_eq!(last.rotation, Rotation::Deg90);
        assert_eq!(last.zoom, Zoom::Percent(100));
        assert!(view.drain_events().is_empty());
    }

    #[test]
    fn next_after_close_shows_replacement_entry() {
        let dir = tempdir().unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let mut files = FileModel::new();
        let mut view = ImageView::new();
        let a = dir.path().join("a.jpg");
        files.set_current(&a).unwrap();
        view.load_image(&a);

        files.remove(&a);
        view.close_image();

        assert_eq!(view.next_image(&mut files), Some(dir.path().join("b.jpg")));
        assert_eq!(view.next_image(&mut files), Some(dir.path().join("c.jpg")));
        assert_eq!(view.previous_image(&mut files), Some(dir.path().join("b.jpg")));
    }
}
