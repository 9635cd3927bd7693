//! Modal dialog widget
//!
//! Renders a `scrim-core` dialog description as an iced element:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ dimmed scrim (press to dismiss)              │
//! │      ┌─────────────────────────────────┐     │
//! │      │  Title                     [×]  │     │
//! │      ├─────────────────────────────────┤     │
//! │      │  body content                   │     │
//! │      ├─────────────────────────────────┤     │
//! │      │                [Cancel] [Action]│     │
//! │      └─────────────────────────────────┘     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Keyboard dismissal is routed by the application: forward window key
//! events through [`on_key_press`] from the update handler.

mod input;
mod view;

pub use input::{map_key, on_key_press};
pub use view::{dialog_view, overlay_view, styled_dialog_view, styled_overlay_view};

/// Fixed dialog surface width in pixels
pub const DIALOG_WIDTH: f32 = 450.0;

/// Padding around the dialog surface content
pub const DIALOG_PADDING: f32 = 30.0;

/// Vertical spacing between header, body, and action row
pub const DIALOG_SPACING: f32 = 15.0;
