//! Simulated user interactions dispatched at dialogs

use crate::semantics::Part;

/// Named keys the dialog layer distinguishes.
///
/// Everything else collapses into [`Key::Other`]; the toolkit layer maps its
/// own key type into this one before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Other,
}

/// A user interaction aimed at a dialog.
///
/// Key presses are document-level: they reach the dialog regardless of which
/// region holds the pointer. Clicks carry the [`Part`] they landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    KeyPressed(Key),
    Clicked(Part),
}
