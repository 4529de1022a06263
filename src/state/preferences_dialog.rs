//! Editable copy of the preferences, grouped the way the dialog shows them.

use crate::preferences::{Color, Preferences, SortBy, SortOrder};
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTab {
    pub bg_color_view: Color,
    pub bg_color_slideshow: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTab {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub zoom_step: i32,
    pub key_next_image: String,
    pub key_previous_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowTab {
    pub timeout: u32,
}

/// Display, Control and Slideshow tabs.
///
/// Nothing here touches the live preferences until [`PreferencesDialog::save`]
/// is called on accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesDialog {
    pub display: DisplayTab,
    pub control: ControlTab,
    pub slideshow: SlideshowTab,
}

impl PreferencesDialog {
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            display: DisplayTab {
                bg_color_view: preferences.bg_color_view,
                bg_color_slideshow: preferences.bg_color_slideshow,
            },
            control: ControlTab {
                sort_by: preferences.sort_by,
                sort_order: preferences.sort_by_advanced,
                zoom_step: preferences.zoom_step,
                key_next_image: preferences.key_next_image.clone(),
                key_previous_image: preferences.key_previous_image.clone(),
            },
            slideshow: SlideshowTab {
                timeout: preferences.timeout,
            },
        }
    }

    /// Copies the current preferences into the tabs.
    pub fn load(&mut self, preferences: &Preferences) {
        *self = Self::new(preferences);
    }

    /// Writes the tabs back into `preferences`. Only the fields the dialog
    /// edits are touched; bar visibility stays as it is.
    pub fn save(&self, preferences: &mut Preferences) {
        preferences.bg_color_view = self.display.bg_color_view;
        preferences.bg_color_slideshow = self.display.bg_color_slideshow;
        preferences.sort_by = self.control.sort_by;
        preferences.sort_by_advanced = self.control.sort_order;
        preferences.zoom_step = self.control.zoom_step;
        preferences.key_next_image = self.control.key_next_image.clone();
        preferences.key_previous_image = self.control.key_previous_image.clone();
        preferences.timeout = self.slideshow.timeout;
    }

    pub fn restore_defaults(&mut self) {
        self.load(&Preferences::default());
    }

    /// Applies a typed color; text that is not a color keeps the old value.
    pub fn set_color_text(color: &mut Color, text: &str) -> bool {
        match text.parse() {
            Ok(parsed) => {
                *color = parsed;
                true
            }
            Err(e) => {
                warn!("Ignoring color entry: {}", e);
                false
            }
        }
    }
}
