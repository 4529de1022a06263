//! Window orchestration: action dispatch, bar visibility, fullscreen and
//! slideshow.
//!
//! Everything here is plain state. Work that needs the toolkit (dialogs,
//! decoding, the timer, the native window) is handed back to the UI layer as
//! [`Effect`]s.

use crate::config::WINDOW_TITLE;
use crate::error::{AppError, Result};
use crate::file_utils::{self, PathExt};
use crate::preferences::{Color, Preferences, SortBy, SortOrder};
use crate::state::actions::Action;
use crate::state::file_model::FileEvent;
use crate::state::image_view::{ImageStatus, Rotation, ViewEvent, Zoom};
use crate::state::{FileModel, ImageView, PreferencesDialog, StatusBar};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Key name that leaves fullscreen.
pub const ESCAPE_KEY: &str = "Escape";

/// Work the UI layer performs on behalf of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask for an image to open, then call [`MainWindow::open_image`].
    PromptOpen { directory: Option<PathBuf> },
    /// Ask for a target path, then call [`MainWindow::save_image`].
    PromptSave { suggested: PathBuf },
    /// Ask for confirmation, then call [`MainWindow::delete_image`].
    ConfirmDelete { path: PathBuf, name: String },
    /// Show the preferences dialog, then call
    /// [`MainWindow::accept_preferences`] if the user accepts.
    ShowPreferences(PreferencesDialog),
    /// Decode and display an image; report the size back with
    /// [`MainWindow::image_decoded`].
    LoadImage(PathBuf),
    /// Re-render the current image after a rotation.
    RenderImage,
    /// Write the displayed image to this path.
    WriteImage(PathBuf),
    CloseImage,
    /// (Re)start the repeating slideshow timer.
    StartTimer(Duration),
    StopTimer,
    SetFullscreen(bool),
    Quit,
}

/// Visibility of the window strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub menu_bar: bool,
    pub tool_bar: bool,
    pub status_bar: bool,
    pub fullscreen: bool,
}

/// Everything the UI mirrors from the window state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub title: String,
    pub chrome: Chrome,
    pub background: Color,
    pub slideshow_running: bool,
    pub timer_interval: Duration,
    pub zoom: Zoom,
    pub zoom_step: i32,
    pub rotation: Rotation,
    pub displayed_dimensions: Option<(u32, u32)>,
    pub sorting: (SortBy, SortOrder),
    pub status_text: String,
    pub status_error: Option<String>,
}

/// Owns the preferences, file model, image view and status bar for the
/// lifetime of the window.
pub struct MainWindow {
    preferences: Preferences,
    preferences_path: Option<PathBuf>,
    files: FileModel,
    view: ImageView,
    status_bar: StatusBar,
    chrome: Chrome,
    slideshow_running: bool,
    timer_interval: Duration,
    title: String,
}

impl MainWindow {
    /// Builds the window and applies `preferences` once.
    ///
    /// `preferences_path` is where accepted dialog changes are persisted;
    /// `None` keeps them in memory only.
    pub fn new(preferences: Preferences, preferences_path: Option<PathBuf>) -> Self {
        let mut window = Self {
            preferences,
            preferences_path,
            files: FileModel::new(),
            view: ImageView::new(),
            status_bar: StatusBar::new(),
            chrome: Chrome {
                menu_bar: true,
                tool_bar: true,
                status_bar: true,
                fullscreen: false,
            },
            slideshow_running: false,
            timer_interval: Duration::ZERO,
            title: WINDOW_TITLE.to_string(),
        };
        window.set_preferences();
        window
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn files(&self) -> &FileModel {
        &self.files
    }

    pub fn view(&self) -> &ImageView {
        &self.view
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn is_slideshow_running(&self) -> bool {
        self.slideshow_running
    }

    /// Runs the single handler bound to `action`.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        debug!("Dispatching {:?}", action);
        let effects = match action {
            Action::Open => vec![Effect::PromptOpen {
                directory: self.files.directory().map(Path::to_path_buf),
            }],
            Action::Save => self.request_save(),
            Action::Delete => self.request_delete(),
            Action::Quit => vec![Effect::Quit],
            Action::Preferences => vec![Effect::ShowPreferences(self.open_preferences())],
            Action::SortByDate => self.sort_by(SortBy::Date),
            Action::SortByFileName => self.sort_by(SortBy::FileName),
            Action::SortAscending => self.sort_by_advanced(SortOrder::Ascending),
            Action::SortDescending => self.sort_by_advanced(SortOrder::Descending),
            Action::Fullscreen => self.toggle_fullscreen(),
            Action::RotateLeft => {
                self.view.rotate_left();
                vec![Effect::RenderImage]
            }
            Action::RotateRight => {
                self.view.rotate_right();
                vec![Effect::RenderImage]
            }
            Action::ShowMenuBar(value) => self.show_menu_bar(value),
            Action::ShowToolBar(value) => self.show_tool_bar(value),
            Action::ShowStatusBar(value) => self.show_status_bar(value),
            Action::NextImage => self.next_image(),
            Action::PreviousImage => self.previous_image(),
            Action::Slideshow => self.toggle_slideshow(),
            Action::ZoomFit => {
                self.view.zoom_fit();
                Vec::new()
            }
            Action::ZoomOriginal => {
                self.view.zoom_original();
                Vec::new()
            }
            Action::ZoomIn => {
                self.view.zoom_in();
                Vec::new()
            }
            Action::ZoomOut => {
                self.view.zoom_out();
                Vec::new()
            }
        };
        self.route_events();
        effects
    }

    /// Opens the image the user picked. `None` means the dialog was cancelled.
    pub fn open_image(&mut self, picked: Option<PathBuf>) -> Result<Vec<Effect>> {
        let Some(path) = picked else {
            return Ok(Vec::new());
        };

        let path = std::path::absolute(&path)?;
        self.files.set_current(&path)?;
        self.view.load_image(&path);
        self.route_events();
        info!("Opened {}", path.format_for_log());
        Ok(vec![Effect::LoadImage(path)])
    }

    /// Writes the displayed image to the picked path. `None` is a no-op.
    pub fn save_image(&mut self, picked: Option<PathBuf>) -> Vec<Effect> {
        match picked {
            Some(path) if self.view.has_image() => vec![Effect::WriteImage(path)],
            _ => Vec::new(),
        }
    }

    /// Rescans the listing when `target` was written into the current
    /// directory. Overwriting the displayed file reloads it, since the
    /// rotation is now part of its pixels.
    pub fn image_saved(&mut self, target: &Path) -> Result<Vec<Effect>> {
        info!("Saved {}", target.format_for_log());
        if target.parent() != self.files.directory() {
            return Ok(Vec::new());
        }
        if let Some(current) = self.files.current_path() {
            self.files.set_current(&current)?;
        }

        let mut effects = Vec::new();
        if self.view.file_name() == Some(target) {
            self.view.load_image(target);
            effects.push(Effect::LoadImage(target.to_path_buf()));
        }
        self.route_events();
        Ok(effects)
    }

    /// Removes `path` from disk if the user confirmed.
    ///
    /// On failure nothing else changes and the error is returned.
    pub fn delete_image(&mut self, path: &Path, confirmed: bool) -> Result<Vec<Effect>> {
        if !confirmed {
            debug!("Delete of {} declined", path.format_for_log());
            return Ok(Vec::new());
        }

        fs::remove_file(path).map_err(|e| {
            AppError::Delete(format!("{}: {}", file_utils::display_name(path), e))
        })?;
        info!("Deleted {}", path.format_for_log());

        self.files.remove(path);
        let mut effects = Vec::new();
        if self.view.file_name() == Some(path) {
            self.view.close_image();
            self.update_title(None);
            effects.push(Effect::CloseImage);
        }
        self.route_events();
        Ok(effects)
    }

    /// `Image Viewer - <name>`, or the bare application title without an image.
    pub fn update_title(&mut self, name: Option<&str>) {
        self.title = match name {
            Some(name) => format!("{} - {}", WINDOW_TITLE, name),
            None => WINDOW_TITLE.to_string(),
        };
    }

    /// Records the decoded size of `path`.
    pub fn image_decoded(&mut self, path: &Path, width: u32, height: u32) -> bool {
        let current = self.view.image_decoded(path, width, height);
        self.route_events();
        current
    }

    /// Shows `message` in the status bar until the next status update.
    pub fn report_error(&mut self, message: String) {
        self.status_bar.set_error(message);
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<Effect> {
        self.chrome.fullscreen = !self.chrome.fullscreen;
        self.apply_bars();
        debug!("Fullscreen: {}", self.chrome.fullscreen);
        vec![Effect::SetFullscreen(self.chrome.fullscreen)]
    }

    pub fn toggle_slideshow(&mut self) -> Vec<Effect> {
        self.slideshow_running = !self.slideshow_running;
        if self.slideshow_running {
            self.view.set_bg_color(self.preferences.bg_color_slideshow);
            info!("Slideshow started ({:?})", self.timer_interval);
            vec![Effect::StartTimer(self.timer_interval)]
        } else {
            self.view.set_bg_color(self.preferences.bg_color_view);
            info!("Slideshow stopped");
            vec![Effect::StopTimer]
        }
    }

    /// Timer tick: advances to the next image while the slideshow runs.
    pub fn slideshow_step(&mut self) -> Vec<Effect> {
        if !self.slideshow_running {
            return Vec::new();
        }
        let effects = self.next_image();
        self.route_events();
        effects
    }

    /// Re-applies every preference to every dependent component.
    pub fn set_preferences(&mut self) -> Vec<Effect> {
        self.files
            .set_sorting(self.preferences.sort_by, self.preferences.sort_by_advanced);
        self.apply_bars();

        let background = if self.slideshow_running {
            self.preferences.bg_color_slideshow
        } else {
            self.preferences.bg_color_view
        };
        self.view.set_bg_color(background);
        self.view.set_zoom_step(self.preferences.zoom_step);

        let mut effects = Vec::new();
        let interval = Duration::from_secs(self.preferences.timeout.into());
        if interval != self.timer_interval {
            self.timer_interval = interval;
            if self.slideshow_running {
                effects.push(Effect::StartTimer(interval));
            }
        }

        self.route_events();
        effects
    }

    pub fn show_menu_bar(&mut self, value: bool) -> Vec<Effect> {
        self.preferences.show_menu = value;
        self.apply_bars();
        Vec::new()
    }

    pub fn show_tool_bar(&mut self, value: bool) -> Vec<Effect> {
        self.preferences.show_tool_bar = value;
        self.apply_bars();
        Vec::new()
    }

    pub fn show_status_bar(&mut self, value: bool) -> Vec<Effect> {
        self.preferences.show_status_bar = value;
        self.apply_bars();
        if value {
            self.refresh_status();
        }
        Vec::new()
    }

    pub fn sort_by(&mut self, sort_by: SortBy) -> Vec<Effect> {
        self.preferences.sort_by = sort_by;
        self.set_preferences()
    }

    pub fn sort_by_advanced(&mut self, order: SortOrder) -> Vec<Effect> {
        self.preferences.sort_by_advanced = order;
        self.set_preferences()
    }

    /// Handles a key press from the image view. `None` means the key was not
    /// consumed.
    pub fn handle_key(&mut self, key: &str) -> Option<Vec<Effect>> {
        let effects = if key == ESCAPE_KEY {
            if !self.chrome.fullscreen {
                return None;
            }
            self.toggle_fullscreen()
        } else if key == self.preferences.key_next_image {
            self.next_image()
        } else if key == self.preferences.key_previous_image {
            self.previous_image()
        } else {
            return None;
        };
        self.route_events();
        Some(effects)
    }

    /// Dialog state loaded from the live preferences.
    pub fn open_preferences(&self) -> PreferencesDialog {
        PreferencesDialog::new(&self.preferences)
    }

    /// Applies an accepted dialog and persists the result.
    pub fn accept_preferences(&mut self, dialog: &PreferencesDialog) -> Vec<Effect> {
        dialog.save(&mut self.preferences);
        let effects = self.set_preferences();
        if let Err(e) = self.save_preferences() {
            warn!("Failed to save preferences: {}", e);
            self.report_error(format!("Failed to save preferences: {}", e));
        }
        effects
    }

    pub fn save_preferences(&self) -> Result<()> {
        match &self.preferences_path {
            Some(path) => self.preferences.save_to_path(path),
            None => Ok(()),
        }
    }

    /// Whether the menu entry `id` shows a checkmark.
    pub fn is_checked(&self, id: &str) -> bool {
        let (sort_by, order) = (self.preferences.sort_by, self.preferences.sort_by_advanced);
        match id {
            "sort-by-date" => sort_by == SortBy::Date,
            "sort-by-filename" => sort_by == SortBy::FileName,
            "sort-ascending" => order == SortOrder::Ascending,
            "sort-descending" => order == SortOrder::Descending,
            "show-menu-bar" => self.preferences.show_menu,
            "show-tool-bar" => self.preferences.show_tool_bar,
            "show-status-bar" => self.preferences.show_status_bar,
            _ => false,
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            title: self.title.clone(),
            chrome: self.chrome,
            background: self.view.bg_color(),
            slideshow_running: self.slideshow_running,
            timer_interval: self.timer_interval,
            zoom: self.view.zoom(),
            zoom_step: self.view.zoom_step(),
            rotation: self.view.rotation(),
            displayed_dimensions: self.view.displayed_dimensions(),
            sorting: self.files.sorting(),
            status_text: self.status_bar.text(),
            status_error: self.status_bar.error().map(str::to_string),
        }
    }

    fn next_image(&mut self) -> Vec<Effect> {
        match self.view.next_image(&mut self.files) {
            Some(path) => vec![Effect::LoadImage(path)],
            None => Vec::new(),
        }
    }

    fn previous_image(&mut self) -> Vec<Effect> {
        match self.view.previous_image(&mut self.files) {
            Some(path) => vec![Effect::LoadImage(path)],
            None => Vec::new(),
        }
    }

    fn request_save(&self) -> Vec<Effect> {
        match self.view.file_name() {
            Some(path) => vec![Effect::PromptSave {
                suggested: path.to_path_buf(),
            }],
            None => Vec::new(),
        }
    }

    fn request_delete(&self) -> Vec<Effect> {
        match self.view.file_name() {
            Some(path) => vec![Effect::ConfirmDelete {
                path: path.to_path_buf(),
                name: file_utils::display_name(path),
            }],
            None => Vec::new(),
        }
    }

    /// Bars follow their preference except in fullscreen, where all are hidden.
    fn apply_bars(&mut self) {
        let shown = !self.chrome.fullscreen;
        self.chrome.menu_bar = shown && self.preferences.show_menu;
        self.chrome.tool_bar = shown && self.preferences.show_tool_bar;
        self.chrome.status_bar = shown && self.preferences.show_status_bar;
    }

    fn refresh_status(&mut self) {
        let status = self.view.status();
        self.update_status(&status);
    }

    fn update_status(&mut self, status: &ImageStatus) {
        let position = self.files.current_index().map(|index| (index, self.files.len()));
        self.status_bar.update(status, position);
    }

    /// Delivers pending notifications: titles to the window, status to the
    /// status bar.
    fn route_events(&mut self) {
        for event in self.files.drain_events() {
            match event {
                FileEvent::TitleChanged(name) => self.update_title(Some(&name)),
            }
        }
        if let Some(ViewEvent::StatusChanged(status)) = self.view.drain_events().pop() {
            self.update_status(&status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn directory_with(names: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    fn window() -> MainWindow {
        MainWindow::new(Preferences::default(), None)
    }

    fn opened(dir: &TempDir, name: &str) -> MainWindow {
        let mut window = window();
        window.open_image(Some(dir.path().join(name))).unwrap();
        window
    }

    #[test]
    fn applying_preferences_twice_is_idempotent() {
        let mut window = MainWindow::new(
            Preferences {
                show_tool_bar: false,
                sort_by: SortBy::Date,
                timeout: 5,
                ..Preferences::default()
            },
            None,
        );
        window.set_preferences();
        let first = window.ui_state();

        let effects = window.set_preferences();

        assert!(effects.is_empty());
        assert_eq!(window.ui_state(), first);
        assert!(!first.chrome.tool_bar);
        assert_eq!(first.timer_interval, Duration::from_secs(5));
    }

    #[test]
    fn fullscreen_toggle_is_its_own_inverse() {
        let mut window = window();
        window.dispatch(Action::ShowToolBar(false));
        let before = window.chrome();

        assert_eq!(
            window.dispatch(Action::Fullscreen),
            vec![Effect::SetFullscreen(true)]
        );
        let full = window.chrome();
        assert!(!full.menu_bar && !full.tool_bar && !full.status_bar);

        window.dispatch(Action::Fullscreen);
        assert_eq!(window.chrome(), before);
    }

    #[test]
    fn escape_only_consumed_in_fullscreen() {
        let mut window = window();
        assert_eq!(window.handle_key(ESCAPE_KEY), None);

        window.toggle_fullscreen();
        assert_eq!(
            window.handle_key(ESCAPE_KEY),
            Some(vec![Effect::SetFullscreen(false)])
        );
        assert!(!window.chrome().fullscreen);
    }

    #[test]
    fn slideshow_start_stop_restores_background() {
        let mut window = MainWindow::new(
            Preferences {
                bg_color_view: Color::rgb(1, 2, 3),
                bg_color_slideshow: Color::rgb(9, 9, 9),
                timeout: 4,
                ..Preferences::default()
            },
            None,
        );
        let before = window.ui_state().background;

        assert_eq!(
            window.dispatch(Action::Slideshow),
            vec![Effect::StartTimer(Duration::from_secs(4))]
        );
        assert_eq!(window.ui_state().background, Color::rgb(9, 9, 9));

        assert_eq!(window.dispatch(Action::Slideshow), vec![Effect::StopTimer]);
        assert_eq!(window.ui_state().background, before);
        assert!(!window.is_slideshow_running());
        assert!(window.slideshow_step().is_empty());
    }

    #[test]
    fn slideshow_tick_advances() {
        let dir = directory_with(&["a.jpg", "b.jpg"]);
        let mut window = opened(&dir, "a.jpg");
        window.toggle_slideshow();

        assert_eq!(
            window.slideshow_step(),
            vec![Effect::LoadImage(dir.path().join("b.jpg"))]
        );
        assert_eq!(window.title(), "Image Viewer - b.jpg");
    }

    #[test]
    fn new_timeout_restarts_running_slideshow() {
        let mut window = window();
        window.toggle_slideshow();
        let mut dialog = window.open_preferences();
        dialog.slideshow.timeout = 8;

        assert_eq!(
            window.accept_preferences(&dialog),
            vec![Effect::StartTimer(Duration::from_secs(8))]
        );
        assert_eq!(window.ui_state().background, Color::BLACK);
    }

    #[test]
    fn open_prompt_starts_in_current_directory() {
        assert_eq!(
            window().dispatch(Action::Open),
            vec![Effect::PromptOpen { directory: None }]
        );

        let dir = directory_with(&["a.jpg"]);
        let mut window = opened(&dir, "a.jpg");
        assert_eq!(
            window.dispatch(Action::Open),
            vec![Effect::PromptOpen {
                directory: Some(dir.path().to_path_buf())
            }]
        );
    }

    #[test]
    fn relative_open_selects_the_named_file() {
        let dir = directory_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let cwd = std::env::current_dir().unwrap();
        let mut window = window();
        let result = window.open_image(Some(PathBuf::from("c.jpg")));
        std::env::set_current_dir(previous).unwrap();

        let absolute = cwd.join("c.jpg");
        assert_eq!(result.unwrap(), vec![Effect::LoadImage(absolute.clone())]);
        assert_eq!(window.title(), "Image Viewer - c.jpg");
        assert_eq!(window.files().current_index(), Some(2));
        assert_eq!(window.view().file_name(), Some(absolute.as_path()));
        assert_eq!(
            window.dispatch(Action::NextImage),
            vec![Effect::LoadImage(cwd.join("a.jpg"))]
        );
    }

    #[test]
    fn saving_into_current_directory_extends_listing() {
        let dir = directory_with(&["a.jpg", "c.jpg"]);
        let mut window = opened(&dir, "c.jpg");
        let target = dir.path().join("b.jpg");
        fs::write(&target, b"").unwrap();

        assert!(window.image_saved(&target).unwrap().is_empty());

        assert_eq!(window.files().len(), 3);
        assert_eq!(window.files().current_index(), Some(2));
        assert_eq!(window.title(), "Image Viewer - c.jpg");

        let elsewhere = directory_with(&[]);
        assert!(window.image_saved(&elsewhere.path().join("d.jpg")).unwrap().is_empty());
        assert_eq!(window.files().len(), 3);
    }

    #[test]
    fn overwriting_displayed_image_reloads_it() {
        let dir = directory_with(&["a.jpg"]);
        let path = dir.path().join("a.jpg");
        let mut window = opened(&dir, "a.jpg");
        window.dispatch(Action::RotateRight);

        assert_eq!(
            window.image_saved(&path).unwrap(),
            vec![Effect::LoadImage(path)]
        );
        assert_eq!(window.ui_state().rotation, Rotation::Deg0);
    }

    #[test]
    fn cancelled_open_changes_nothing() {
        let mut window = window();
        let before = window.ui_state();
        assert!(window.open_image(None).unwrap().is_empty());
        assert_eq!(window.ui_state(), before);
    }

    #[test]
    fn open_updates_title_and_loads() {
        let dir = directory_with(&["a.jpg", "b.jpg"]);
        let mut window = window();

        let effects = window.open_image(Some(dir.path().join("b.jpg"))).unwrap();

        assert_eq!(effects, vec![Effect::LoadImage(dir.path().join("b.jpg"))]);
        assert_eq!(window.title(), "Image Viewer - b.jpg");
        assert!(window.ui_state().status_text.contains("2/2"));
    }

    #[test]
    fn sort_actions_update_preferences_and_listing() {
        let dir = directory_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut window = opened(&dir, "a.jpg");

        window.dispatch(Action::SortDescending);

        assert_eq!(window.preferences().sort_by_advanced, SortOrder::Descending);
        assert!(window.is_checked("sort-descending"));
        assert!(!window.is_checked("sort-ascending"));
        let names: Vec<String> = window.files().entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["c.jpg", "b.jpg", "a.jpg"]);
    }

    #[test]
    fn declined_delete_keeps_file_and_view() {
        let dir = directory_with(&["a.jpg"]);
        let path = dir.path().join("a.jpg");
        let mut window = opened(&dir, "a.jpg");

        let request = window.dispatch(Action::Delete);
        assert_eq!(
            request,
            vec![Effect::ConfirmDelete {
                path: path.clone(),
                name: "a.jpg".to_string()
            }]
        );
        let before = window.ui_state();

        assert!(window.delete_image(&path, false).unwrap().is_empty());
        assert!(path.exists());
        assert_eq!(window.ui_state(), before);
        assert_eq!(window.view().file_name(), Some(path.as_path()));
    }

    #[test]
    fn confirmed_delete_removes_file_and_closes_view() {
        let dir = directory_with(&["a.jpg", "b.jpg"]);
        let path = dir.path().join("a.jpg");
        let mut window = opened(&dir, "a.jpg");

        let effects = window.delete_image(&path, true).unwrap();

        assert_eq!(effects, vec![Effect::CloseImage]);
        assert!(!path.exists());
        assert!(!window.view().has_image());
        assert_eq!(window.files().len(), 1);
        assert_eq!(
            window.dispatch(Action::NextImage),
            vec![Effect::LoadImage(dir.path().join("b.jpg"))]
        );
    }

    #[test]
    fn failed_delete_is_reported_and_view_stays() {
        let dir = directory_with(&["a.jpg"]);
        let path = dir.path().join("a.jpg");
        let mut window = opened(&dir, "a.jpg");
        fs::remove_file(&path).unwrap();

        let result = window.delete_image(&path, true);

        assert!(matches!(result, Err(AppError::Delete(_))));
        assert!(window.view().has_image());
    }

    #[test]
    fn configured_keys_navigate() {
        let dir = directory_with(&["a.jpg", "b.jpg"]);
        let mut window = opened(&dir, "a.jpg");

        assert_eq!(
            window.handle_key("Right"),
            Some(vec![Effect::LoadImage(dir.path().join("b.jpg"))])
        );
        assert_eq!(
            window.handle_key("Left"),
            Some(vec![Effect::LoadImage(dir.path().join("a.jpg"))])
        );
        assert_eq!(window.handle_key("x"), None);
    }

    #[test]
    fn save_requires_an_image_and_a_target() {
        let dir = directory_with(&["a.jpg"]);
        let mut empty = window();
        assert!(empty.dispatch(Action::Save).is_empty());

        let mut window = opened(&dir, "a.jpg");
        assert_eq!(
            window.dispatch(Action::Save),
            vec![Effect::PromptSave {
                suggested: dir.path().join("a.jpg")
            }]
        );
        assert!(window.save_image(None).is_empty());
        let target = dir.path().join("copy.png");
        assert_eq!(
            window.save_image(Some(target.clone())),
            vec![Effect::WriteImage(target)]
        );
    }

    #[test]
    fn accepted_preferences_are_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let mut window = MainWindow::new(Preferences::default(), Some(path.clone()));
        let mut dialog = window.open_preferences();
        dialog.control.zoom_step = 33;

        window.accept_preferences(&dialog);

        assert_eq!(window.ui_state().zoom_step, 33);
        assert_eq!(Preferences::load_from_path(&path).unwrap().zoom_step, 33);
    }

    #[test]
    fn bar_toggles_update_preferences() {
        let mut window = window();
        window.dispatch(Action::ShowMenuBar(false));
        window.dispatch(Action::ShowStatusBar(false));

        assert!(!window.preferences().show_menu);
        assert!(!window.chrome().menu_bar);
        assert!(!window.chrome().status_bar);
        assert!(!window.is_checked("show-status-bar"));
        assert!(window.chrome().tool_bar);
    }
}
