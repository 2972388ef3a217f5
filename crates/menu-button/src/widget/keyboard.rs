//! Keyboard input conversion from platform events.
//!
//! Browsers report keys through `KeyboardEvent.key`, a string that is either a
//! named key (`"ArrowDown"`, `"Escape"`) or the text the key produces (`"a"`,
//! `" "`). This module maps those strings onto the widget's [`Key`] alphabet.
//! Older engines use legacy names (`"Down"`, `"Esc"`, `"Spacebar"`); those are
//! accepted as well.
//!
//! ```
//! use menu_button::widget::keyboard::from_dom_key;
//! use menu_button::widget::Key;
//!
//! assert_eq!(from_dom_key("ArrowUp"), Key::ArrowUp);
//! assert_eq!(from_dom_key("Esc"), Key::Escape);
//! assert_eq!(from_dom_key("a"), Key::Char('a'));
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::events::{Key, KeyPressEvent, KeyboardModifiers};

/// Converts a DOM `KeyboardEvent.key` value to a [`Key`].
pub fn from_dom_key(key: &str) -> Key {
    match key {
        // Navigation
        "ArrowUp" | "Up" => Key::ArrowUp,
        "ArrowDown" | "Down" => Key::ArrowDown,
        "Home" => Key::Home,
        "End" => Key::End,

        // Activation and dismissal
        "Enter" => Key::Enter,
        " " | "Spacebar" => Key::Space,
        "Escape" | "Esc" => Key::Escape,
        "Tab" => Key::Tab,

        _ => from_character(key),
    }
}

/// Converts produced text to a [`Key`].
///
/// Only a single grapheme made of a single non-control scalar is printable;
/// named keys such as `"Shift"` or `"F5"` fall through to `Unidentified`.
fn from_character(text: &str) -> Key {
    let mut graphemes = text.graphemes(true);
    let (Some(grapheme), None) = (graphemes.next(), graphemes.next()) else {
        return Key::Unidentified;
    };

    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Key::Char(c),
        _ => Key::Unidentified,
    }
}

/// Builds a [`KeyPressEvent`] from DOM `key` and modifier flags.
pub fn key_event_from_dom(key: &str, modifiers: KeyboardModifiers) -> KeyPressEvent {
    KeyPressEvent::new(from_dom_key(key)).with_modifiers(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(from_dom_key("ArrowDown"), Key::ArrowDown);
        assert_eq!(from_dom_key("Down"), Key::ArrowDown);
        assert_eq!(from_dom_key("Home"), Key::Home);
        assert_eq!(from_dom_key("End"), Key::End);
        assert_eq!(from_dom_key("Enter"), Key::Enter);
        assert_eq!(from_dom_key("Escape"), Key::Escape);
        assert_eq!(from_dom_key("Tab"), Key::Tab);
    }

    #[test]
    fn test_space_variants() {
        assert_eq!(from_dom_key(" "), Key::Space);
        assert_eq!(from_dom_key("Spacebar"), Key::Space);
    }

    #[test]
    fn test_characters() {
        assert_eq!(from_dom_key("x"), Key::Char('x'));
        assert_eq!(from_dom_key("A"), Key::Char('A'));
        assert_eq!(from_dom_key("é"), Key::Char('é'));
    }

    #[test]
    fn test_unhandled_keys() {
        assert_eq!(from_dom_key("Shift"), Key::Unidentified);
        assert_eq!(from_dom_key("F5"), Key::Unidentified);
        assert_eq!(from_dom_key(""), Key::Unidentified);
        assert_eq!(from_dom_key("\u{7f}"), Key::Unidentified);
        // A base letter plus combining accent is one grapheme but two scalars.
        assert_eq!(from_dom_key("e\u{301}"), Key::Unidentified);
    }

    #[test]
    fn test_event_carries_modifiers() {
        let event = key_event_from_dom("a", KeyboardModifiers::CTRL);
        assert_eq!(event.key, Key::Char('a'));
        assert!(event.modifiers.control);
    }
}
