//! Scrim and overlay composition helpers
//!
//! Builds the dimmed full-screen backdrop behind a dialog and stacks it with
//! the base content and the centered dialog surface.

use iced::widget::{center, container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length};

use crate::theme;

/// Build a semi-transparent scrim with the default color.
pub fn scrim<'a, M: Clone + 'a>(on_dismiss: Option<M>) -> Element<'a, M> {
    tinted_scrim(theme::DEFAULT_SCRIM, on_dismiss)
}

/// Build the scrim that sits behind a dialog.
///
/// When a dismissal message is supplied the scrim intercepts pointer presses
/// and emits it; without one the scrim is purely visual.
pub fn tinted_scrim<'a, M: Clone + 'a>(color: Color, on_dismiss: Option<M>) -> Element<'a, M> {
    let veil = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    match on_dismiss {
        Some(message) => mouse_area(veil).on_press(message).into(),
        None => veil.into(),
    }
}

/// Stack base content, default scrim, and centered dialog content.
pub fn with_overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    content: Element<'a, M>,
    on_dismiss: Option<M>,
) -> Element<'a, M> {
    with_tinted_overlay(base, content, on_dismiss, theme::DEFAULT_SCRIM)
}

/// Stack base content, scrim, and centered dialog content.
///
/// The dialog content is wrapped in `opaque` so presses on it do not fall
/// through to the scrim underneath.
pub fn with_tinted_overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    content: Element<'a, M>,
    on_dismiss: Option<M>,
    scrim_color: Color,
) -> Element<'a, M> {
    let surface = center(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, tinted_scrim(scrim_color, on_dismiss), surface].into()
}
