//! Translation of Slint key event text into the key names stored in the
//! preferences.

use slint::platform::Key;

const NAMED_KEYS: [(Key, &str); 14] = [
    (Key::Escape, "Escape"),
    (Key::LeftArrow, "Left"),
    (Key::RightArrow, "Right"),
    (Key::UpArrow, "Up"),
    (Key::DownArrow, "Down"),
    (Key::PageUp, "PageUp"),
    (Key::PageDown, "PageDown"),
    (Key::Home, "Home"),
    (Key::End, "End"),
    (Key::Space, "Space"),
    (Key::Return, "Return"),
    (Key::Backspace, "Backspace"),
    (Key::Delete, "Delete"),
    (Key::Tab, "Tab"),
];

/// Name of the key that produced `text`, or `None` for modifiers and
/// multi-character input.
pub fn key_name(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some((_, name)) = NAMED_KEYS.iter().find(|(key, _)| char::from(*key) == c) {
        return Some((*name).to_string());
    }
    if c.is_control() || ('\u{f700}'..='\u{f8ff}').contains(&c) {
        return None;
    }
    Some(c.to_string())
}
