//! Declarative menu and toolbar action sets.
//!
//! Each entry carries a stable id; [`Action::from_id`] turns a triggered id
//! back into exactly one [`Action`].

/// Something the user can trigger from a menu, the toolbar or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Save,
    Delete,
    Quit,
    Preferences,
    SortByDate,
    SortByFileName,
    SortAscending,
    SortDescending,
    Fullscreen,
    RotateLeft,
    RotateRight,
    ShowMenuBar(bool),
    ShowToolBar(bool),
    ShowStatusBar(bool),
    NextImage,
    PreviousImage,
    Slideshow,
    ZoomFit,
    ZoomOriginal,
    ZoomIn,
    ZoomOut,
}

impl Action {
    /// Resolves a triggered entry. `checked` is the entry's state after the
    /// click and only matters for checkable entries.
    pub fn from_id(id: &str, checked: bool) -> Option<Self> {
        let action = match id {
            "open" => Action::Open,
            "save" => Action::Save,
            "delete" => Action::Delete,
            "quit" => Action::Quit,
            "preferences" => Action::Preferences,
            "sort-by-date" => Action::SortByDate,
            "sort-by-filename" => Action::SortByFileName,
            "sort-ascending" => Action::SortAscending,
            "sort-descending" => Action::SortDescending,
            "fullscreen" => Action::Fullscreen,
            "rotate-left" => Action::RotateLeft,
            "rotate-right" => Action::RotateRight,
            "show-menu-bar" => Action::ShowMenuBar(checked),
            "show-tool-bar" => Action::ShowToolBar(checked),
            "show-status-bar" => Action::ShowStatusBar(checked),
            "next-image" => Action::NextImage,
            "previous-image" => Action::PreviousImage,
            "slideshow" => Action::Slideshow,
            "zoom-fit" => Action::ZoomFit,
            "zoom-original" => Action::ZoomOriginal,
            "zoom-in" => Action::ZoomIn,
            "zoom-out" => Action::ZoomOut,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Plain,
    /// Independent on/off entry.
    Check,
    /// One of a group; exactly one member is checked.
    Radio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Entry(ActionEntry),
    Separator,
}

const fn plain(id: &'static str, label: &'static str) -> MenuItem {
    MenuItem::Entry(ActionEntry {
        id,
        label,
        kind: ActionKind::Plain,
    })
}

const fn check(id: &'static str, label: &'static str) -> MenuItem {
    MenuItem::Entry(ActionEntry {
        id,
        label,
        kind: ActionKind::Check,
    })
}

const fn radio(id: &'static str, label: &'static str) -> MenuItem {
    MenuItem::Entry(ActionEntry {
        id,
        label,
        kind: ActionKind::Radio,
    })
}

pub const FILE_MENU: &[MenuItem] = &[
    plain("open", "Open…"),
    plain("save", "Save As…"),
    plain("delete", "Move to Trash"),
    MenuItem::Separator,
    plain("quit", "Quit"),
];

pub const EDIT_MENU: &[MenuItem] = &[
    radio("sort-by-date", "Sort by Date"),
    radio("sort-by-filename", "Sort by File Name"),
    MenuItem::Separator,
    radio("sort-ascending", "Ascending"),
    radio("sort-descending", "Descending"),
    MenuItem::Separator,
    plain("preferences", "Preferences…"),
];

pub const VIEW_MENU: &[MenuItem] = &[
    plain("fullscreen", "Fullscreen"),
    MenuItem::Separator,
    plain("rotate-left", "Rotate Left"),
    plain("rotate-right", "Rotate Right"),
    plain("zoom-in", "Zoom In"),
    plain("zoom-out", "Zoom Out"),
    MenuItem::Separator,
    check("show-menu-bar", "Menu Bar"),
    check("show-tool-bar", "Toolbar"),
    check("show-status-bar", "Status Bar"),
];

pub const TOOL_BAR: &[MenuItem] = &[
    plain("open", "Open"),
    plain("save", "Save"),
    plain("delete", "Delete"),
    MenuItem::Separator,
    plain("previous-image", "Previous"),
    plain("slideshow", "Play"),
    plain("next-image", "Next"),
    MenuItem::Separator,
    plain("zoom-fit", "Fit"),
    plain("zoom-original", "1:1"),
    plain("fullscreen", "Fullscreen"),
];

/// Menus in menu bar order.
pub const MENUS: [(&str, &[MenuItem]); 3] =
    [("File", FILE_MENU), ("Edit", EDIT_MENU), ("View", VIEW_MENU)];
