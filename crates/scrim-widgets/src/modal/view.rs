//! Dialog rendering

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use scrim_core::Dialog;

use super::{DIALOG_PADDING, DIALOG_SPACING, DIALOG_WIDTH};
use crate::overlay;
use crate::theme::OverlayColors;

/// Render the dialog surface with the default colors.
pub fn dialog_view<'a, M: Clone + 'a>(
    dialog: &Dialog<M>,
    body: Option<Element<'a, M>>,
) -> Element<'a, M> {
    styled_dialog_view(dialog, body, &OverlayColors::default())
}

/// Render the dialog surface: header with title and close affordance,
/// optional body, and the action row.
pub fn styled_dialog_view<'a, M: Clone + 'a>(
    dialog: &Dialog<M>,
    body: Option<Element<'a, M>>,
    colors: &OverlayColors,
) -> Element<'a, M> {
    let title = text(dialog.title().to_string()).size(24);

    let close_btn = {
        let btn = button(text("×").size(20)).style(button::secondary);
        match dialog.dismiss_message() {
            Some(message) => btn.on_press(message.clone()),
            None => btn,
        }
    };

    let header = row![title, Space::new().width(Length::Fill), close_btn]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let mut content = column![header]
        .spacing(DIALOG_SPACING)
        .width(Length::Fixed(DIALOG_WIDTH));

    if let Some(body) = body {
        content = content.push(body);
    }

    if !dialog.actions().is_empty() {
        let mut actions = row![Space::new().width(Length::Fill)]
            .spacing(10)
            .width(Length::Fill);
        for action in dialog.actions() {
            actions = actions.push(
                button(text(action.label.clone()))
                    .on_press(action.message.clone())
                    .style(button::primary),
            );
        }
        content = content.push(actions);
    }

    let surface = colors.surface_color();
    container(content)
        .padding(DIALOG_PADDING)
        .style(move |theme| {
            let mut style = container::rounded_box(theme);
            style.background = Some(surface.into());
            style
        })
        .into()
}

/// Overlay the dialog on top of base content when it is open.
///
/// Returns the base unchanged for a closed dialog, so callers can
/// unconditionally end their `view` with this.
pub fn overlay_view<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    dialog: &Dialog<M>,
    body: Option<Element<'a, M>>,
) -> Element<'a, M> {
    styled_overlay_view(base, dialog, body, &OverlayColors::default())
}

/// Overlay the dialog with configured colors.
pub fn styled_overlay_view<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    dialog: &Dialog<M>,
    body: Option<Element<'a, M>>,
    colors: &OverlayColors,
) -> Element<'a, M> {
    if !dialog.is_open() {
        return base;
    }

    overlay::with_tinted_overlay(
        base,
        styled_dialog_view(dialog, body, colors),
        dialog.dismiss_message().cloned(),
        colors.scrim_color(),
    )
}
