//! Keyboard routing for dialogs
//!
//! Apps subscribe to window events and forward key presses here from their
//! update handler; the dialog decides whether the key dismisses it.

use iced::keyboard;

use scrim_core::{Dialog, Event, Key};

/// Map an iced keyboard key to the dialog layer's key type.
pub fn map_key(key: &keyboard::Key) -> Key {
    use iced::keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        _ => Key::Other,
    }
}

/// Dispatch a document-level key press at the dialog.
///
/// Returns the message the dialog produces for it, if any. Closed dialogs
/// and unrecognized keys produce nothing.
pub fn on_key_press<M: Clone>(dialog: &Dialog<M>, key: &keyboard::Key) -> Option<M> {
    dialog.update(&Event::KeyPressed(map_key(key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Msg {
        Dismiss,
    }

    #[test]
    fn named_keys_map_to_dialog_keys() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::Escape)), Key::Escape);
        assert_eq!(map_key(&keyboard::Key::Named(Named::Enter)), Key::Enter);
        assert_eq!(map_key(&keyboard::Key::Named(Named::Tab)), Key::Tab);
        assert_eq!(map_key(&keyboard::Key::Named(Named::Space)), Key::Other);
    }

    #[test]
    fn character_keys_map_to_other() {
        let key = keyboard::Key::Character("q".into());
        assert_eq!(map_key(&key), Key::Other);
    }

    #[test]
    fn escape_reaches_open_dialog() {
        let dialog = Dialog::new("Settings").open(true).on_dismiss(Msg::Dismiss);
        let message = on_key_press(&dialog, &keyboard::Key::Named(Named::Escape));
        assert_eq!(message, Some(Msg::Dismiss));
    }

    #[test]
    fn escape_ignored_while_closed() {
        let dialog = Dialog::new("Settings").on_dismiss(Msg::Dismiss);
        assert!(on_key_press(&dialog, &keyboard::Key::Named(Named::Escape)).is_none());
    }
}
