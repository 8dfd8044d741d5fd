//! Global keyboard shortcuts.
//!
//! Maps key combinations to semantic `Shortcut` variants that the app
//! dispatches against the browser.

use iced::keyboard;
use iced::Subscription;

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// F5: re-request the current page.
    Refresh,
    /// Ctrl+F or `/`: focus the search input.
    FocusSearch,
    /// Escape: clear the query.
    ClearQuery,
    /// PageUp or Alt+Left.
    PrevPage,
    /// PageDown or Alt+Right.
    NextPage,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
///
/// Only events no widget captured are mapped, so typing `/` into the search
/// box inserts the character instead of refocusing.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, status, _id| match (event, status) {
        (
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            iced::event::Status::Ignored,
        ) => map_shortcut(key, modifiers).map(Message::Shortcut),
        (
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            iced::event::Status::Captured,
        ) => map_captured(key, modifiers).map(Message::Shortcut),
        _ => None,
    })
}

fn map_shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    match key {
        keyboard::Key::Character(ref c) if !modifiers.control() && c.as_str() == "/" => {
            Some(Shortcut::FocusSearch)
        }
        key => map_captured(key, modifiers),
    }
}

/// Shortcuts that still apply while the search input has focus.
fn map_captured(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    use keyboard::key::Named;
    use keyboard::Key;

    let ctrl = modifiers.control();
    let alt = modifiers.alt();

    match key {
        Key::Named(Named::F5) => Some(Shortcut::Refresh),
        Key::Named(Named::Escape) => Some(Shortcut::ClearQuery),
        Key::Named(Named::PageUp) => Some(Shortcut::PrevPage),
        Key::Named(Named::PageDown) => Some(Shortcut::NextPage),
        Key::Named(Named::ArrowLeft) if alt => Some(Shortcut::PrevPage),
        Key::Named(Named::ArrowRight) if alt => Some(Shortcut::NextPage),
        Key::Character(ref c) if ctrl && c.as_str() == "f" => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;
    use keyboard::{Key, Modifiers};

    fn ch(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_function_and_paging_keys() {
        let none = Modifiers::empty();
        assert_eq!(
            map_shortcut(Key::Named(Named::F5), none),
            Some(Shortcut::Refresh)
        );
        assert_eq!(
            map_shortcut(Key::Named(Named::PageDown), none),
            Some(Shortcut::NextPage)
        );
        assert_eq!(
            map_shortcut(Key::Named(Named::ArrowLeft), Modifiers::ALT),
            Some(Shortcut::PrevPage)
        );
        assert_eq!(map_shortcut(Key::Named(Named::ArrowLeft), none), None);
    }

    #[test]
    fn test_focus_search() {
        assert_eq!(
            map_shortcut(ch("f"), Modifiers::CTRL),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(
            map_shortcut(ch("/"), Modifiers::empty()),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(map_shortcut(ch("f"), Modifiers::empty()), None);
    }

    #[test]
    fn test_slash_is_text_while_typing() {
        assert_eq!(map_captured(ch("/"), Modifiers::empty()), None);
        assert_eq!(
            map_captured(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Shortcut::ClearQuery)
        );
    }
}
