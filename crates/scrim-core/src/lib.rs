//! Dialog semantics and interaction model for scrim overlays
//!
//! This crate holds everything about a modal dialog that does not depend on
//! a rendering toolkit:
//!
//! - **Dialog descriptions**: [`Dialog`] is pure data built in the builder
//!   style, holding the open flag, title, dismissal message, and action list.
//! - **Semantics tree**: [`Dialog::semantics`] exposes the accessibility
//!   structure of an open dialog (roles, labels, the modal flag, the
//!   labelled-by reference, focus placement).
//! - **Interaction dispatch**: [`Dialog::update`] turns simulated user
//!   events (key presses, clicks on dialog regions) into application
//!   messages.
//!
//! The split mirrors the state/message/view layering used by the iced layer
//! in `scrim-widgets`: a dialog description is rebuilt from application
//! state on every frame, and dispatch never mutates the description itself.

pub mod dialog;
pub mod event;
pub mod semantics;

pub use dialog::{Action, Dialog, CLOSE_LABEL};
pub use event::{Event, Key};
pub use semantics::{Node, Part, Role};
