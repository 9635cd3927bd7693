//! iced view layer for scrim dialog overlays
//!
//! This crate renders `scrim-core` dialog descriptions with iced 0.14.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **Descriptions**: A [`Dialog`](scrim_core::Dialog) is rebuilt from
//!   application state in `view`, the same way widget trees are.
//! - **View functions**: Take a description + content, return
//!   `Element<Message>`; no widget-local state.
//! - **Keyboard routing**: Apps forward window key events through
//!   [`modal::on_key_press`] from their own update handler.
//!
//! ## Modules
//!
//! - [`overlay`]: scrim backdrop and stacked overlay composition
//! - [`modal`]: the dialog view (header, body, action row) and key mapping
//! - [`theme`]: color constants plus a YAML-configurable theme file

pub mod modal;
pub mod overlay;
pub mod theme;

// Re-export commonly used items
pub use modal::{dialog_view, on_key_press, overlay_view, styled_dialog_view, styled_overlay_view};
pub use overlay::{scrim, with_overlay};
pub use theme::{default_theme_path, load_theme, save_theme, OverlayColors, ThemeConfig};
