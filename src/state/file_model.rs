//! Directory listing with sort order and current selection.

use crate::error::Result;
use crate::file_utils::{self, FileEntry, PathExt};
use crate::preferences::{SortBy, SortOrder};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Notifications emitted by the file model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    /// The current file's display name, for the window title.
    TitleChanged(String),
}

/// Orders `entries` by the two sort axes combined.
pub fn sort_entries(entries: &mut [FileEntry], sort_by: SortBy, order: SortOrder) {
    let by_name = |a: &FileEntry, b: &FileEntry| {
        let (a, b) = (a.name(), b.name());
        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(&b))
    };

    entries.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::FileName => by_name(a, b),
            SortBy::Date => a.modified.cmp(&b.modified).then_with(|| by_name(a, b)),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Tracks the images of the current directory and which one is selected.
///
/// `current` is `Some` exactly when `entries` is non-empty.
#[derive(Debug, Default)]
pub struct FileModel {
    directory: Option<PathBuf>,
    entries: Vec<FileEntry>,
    current: Option<usize>,
    sort_by: SortBy,
    sort_order: SortOrder,
    events: Vec<FileEvent>,
}

impl FileModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `path` the current file, rescanning its directory.
    ///
    /// Relative paths are resolved against the working directory so they
    /// match the scanned entries.
    pub fn set_current(&mut self, path: &Path) -> Result<()> {
        let path = &std::path::absolute(path)?;
        let directory = match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => path.to_path_buf(),
        };
        debug!("Scanning {}", directory.format_for_log());

        let mut entries = file_utils::scan_directory(&directory)?;
        sort_entries(&mut entries, self.sort_by, self.sort_order);

        self.directory = Some(directory);
        self.entries = entries;
        self.current = self.position_of(path).or_else(|| {
            if !self.entries.is_empty() {
                warn!("{} is not in its directory listing", path.format_for_log());
                Some(0)
            } else {
                None
            }
        });
        self.notify_title();
        Ok(())
    }

    pub fn sorting(&self) -> (SortBy, SortOrder) {
        (self.sort_by, self.sort_order)
    }

    /// Changes the sort criteria. Re-sorts and keeps the current file selected.
    pub fn set_sorting(&mut self, sort_by: SortBy, sort_order: SortOrder) {
        if (sort_by, sort_order) == self.sorting() {
            return;
        }

        let current_path = self.current_path();
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        sort_entries(&mut self.entries, sort_by, sort_order);

        if let Some(path) = current_path {
            self.current = self.position_of(&path);
        }
        debug!("Sorting changed to {:?} / {:?}", sort_by, sort_order);
        self.notify_title();
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.current.map(|index| self.entries[index].path.clone())
    }

    /// Moves to the next entry, wrapping at the end.
    pub fn next(&mut self) -> Option<PathBuf> {
        let index = self.current?;
        self.select((index + 1) % self.entries.len())
    }

    /// Moves to the previous entry, wrapping at the start.
    pub fn previous(&mut self) -> Option<PathBuf> {
        let index = self.current?;
        let len = self.entries.len();
        self.select((index + len - 1) % len)
    }

    /// The entry [`FileModel::next`] would move to, without moving.
    pub fn peek_next(&self) -> Option<PathBuf> {
        let index = self.current?;
        let next = (index + 1) % self.entries.len();
        (next != index).then(|| self.entries[next].path.clone())
    }

    /// Drops `path` from the listing. The following entry becomes current.
    pub fn remove(&mut self, path: &Path) -> bool {
        let Some(index) = self.position_of(path) else {
            return false;
        };
        self.entries.remove(index);

        self.current = match self.current {
            _ if self.entries.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) => Some(current.min(self.entries.len() - 1)),
            None => None,
        };
        true
    }

    /// Takes the pending notifications.
    pub fn drain_events(&mut self) -> Vec<FileEvent> {
        std::mem::take(&mut self.events)
    }

    fn select(&mut self, index: usize) -> Option<PathBuf> {
        self.current = Some(index);
        self.notify_title();
        self.current_path()
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry.path == path)
    }

    fn notify_title(&mut self) {
        if let Some(path) = self.current_path() {
            self.events
                .push(FileEvent::TitleChanged(file_utils::display_name(&path)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::{TempDir, tempdir};

    fn directory_with(names: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    fn names(model: &FileModel) -> Vec<String> {
        model.entries().iter().map(FileEntry::name).collect()
    }

    #[test]
    fn filename_descending_reverses_listing() {
        let dir = directory_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut model = FileModel::new();
        model.set_sorting(SortBy::FileName, SortOrder::Descending);
        model.set_current(&dir.path().join("a.jpg")).unwrap();

        assert_eq!(names(&model), vec!["c.jpg", "b.jpg", "a.jpg"]);
        assert_eq!(model.current_index(), Some(2));
    }

    #[test]
    fn filename_sort_ignores_case() {
        let dir = directory_with(&["B.png", "a.jpg", "c.bmp"]);
        let mut model = FileModel::new();
        model.set_current(&dir.path().join("a.jpg")).unwrap();

        assert_eq!(names(&model), vec!["a.jpg", "B.png", "c.bmp"]);
    }

    #[test]
    fn date_sort_orders_by_modification_time() {
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let entry = |name: &str, offset: u64| FileEntry {
            path: PathBuf::from(name),
            modified: base + Duration::from_secs(offset),
        };
        let mut entries = vec![entry("a.jpg", 30), entry("b.jpg", 10), entry("c.jpg", 20)];

        sort_entries(&mut entries, SortBy::Date, SortOrder::Ascending);
        let order: Vec<String> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(order, vec!["b.jpg", "c.jpg", "a.jpg"]);

        sort_entries(&mut entries, SortBy::Date, SortOrder::Descending);
        let order: Vec<String> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(order, vec!["a.jpg", "c.jpg", "b.jpg"]);
    }

    #[test]
    fn resort_keeps_current_and_emits_title() {
        let dir = directory_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut model = FileModel::new();
        model.set_current(&dir.path().join("b.jpg")).unwrap();
        model.drain_events();

        model.set_sorting(SortBy::FileName, SortOrder::Descending);

        assert_eq!(model.current_path(), Some(dir.path().join("b.jpg")));
        assert_eq!(
            model.drain_events(),
            vec![FileEvent::TitleChanged("b.jpg".to_string())]
        );
    }

    #[test]
    fn unchanged_sorting_emits_nothing() {
        let dir = directory_with(&["a.jpg"]);
        let mut model = FileModel::new();
        model.set_current(&dir.path().join("a.jpg")).unwrap();
        model.drain_events();

        model.set_sorting(SortBy::FileName, SortOrder::Ascending);

        assert!(model.drain_events().is_empty());
    }

    #[test]
    fn navigation_wraps_around() {
        let dir = directory_with(&["a.jpg", "b.jpg"]);
        let mut model = FileModel::new();
        model.set_current(&dir.path().join("b.jpg")).unwrap();

        assert_eq!(model.peek_next(), Some(dir.path().join("a.jpg")));
        assert_eq!(model.next(), Some(dir.path().join("a.jpg")));
        assert_eq!(model.previous(), Some(dir.path().join("b.jpg")));
    }

    #[test]
    fn empty_model_does_not_navigate() {
        let mut model = FileModel::new();
        assert_eq!(model.next(), None);
        assert_eq!(model.previous(), None);
        assert_eq!(model.current_path(), None);
    }

    #[test]
    fn remove_keeps_index_valid() {
        let dir = directory_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut model = FileModel::new();
        model.set_current(&dir.path().join("c.jpg")).unwrap();

        assert!(model.remove(&dir.path().join("c.jpg")));
        assert_eq!(model.current_path(), Some(dir.path().join("b.jpg")));

        assert!(model.remove(&dir.path().join("a.jpg")));
        assert_eq!(model.current_path(), Some(dir.path().join("b.jpg")));

        assert!(model.remove(&dir.path().join("b.jpg")));
        assert_eq!(model.current_index(), None);
        assert!(!model.remove(&dir.path().join("b.jpg")));
    }
}
