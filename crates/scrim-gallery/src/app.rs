//! Gallery application state and views

use iced::widget::{button, center, column, text};
use iced::{event, keyboard, Alignment, Element, Event, Length, Subscription, Task, Theme};

use scrim_core::Dialog;
use scrim_widgets::{modal, theme};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the confirmation dialog
    OpenDialog,
    /// Dismiss the dialog without clearing
    DismissDialog,
    /// Confirm the clear action
    ClearHistory,
    /// Raw window event (keyboard routing)
    Event(Event),
}

/// Gallery application state
pub struct GalleryApp {
    /// Whether the confirmation dialog is displayed
    dialog_open: bool,
    /// How many times the demo action ran
    clears: usize,
    /// Theme loaded from ~/.config/scrim/theme.yaml
    theme_config: theme::ThemeConfig,
}

impl GalleryApp {
    /// Create a new application instance
    pub fn new() -> (Self, Task<Message>) {
        let theme_config = theme::load_theme(&theme::default_theme_path());

        let app = Self {
            dialog_open: false,
            clears: 0,
            theme_config,
        };

        (app, Task::none())
    }

    /// The confirmation dialog description, rebuilt from state each frame
    fn dialog(&self) -> Dialog<Message> {
        Dialog::new("Clear history")
            .open(self.dialog_open)
            .on_dismiss(Message::DismissDialog)
            .action("Clear", Message::ClearHistory)
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenDialog => {
                self.dialog_open = true;
            }
            Message::DismissDialog => {
                log::info!("dialog dismissed");
                self.dialog_open = false;
            }
            Message::ClearHistory => {
                self.clears += 1;
                log::info!("history cleared ({} total)", self.clears);
                self.dialog_open = false;
            }
            Message::Event(Event::Keyboard(keyboard::Event::KeyPressed { key, .. })) => {
                if let Some(next) = modal::on_key_press(&self.dialog(), &key) {
                    return self.update(next);
                }
            }
            Message::Event(_) => {}
        }

        Task::none()
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let status = if self.clears == 0 {
            String::from("History intact")
        } else {
            format!("History cleared {} time(s)", self.clears)
        };

        let base: Element<Message> = center(
            column![
                text(status).size(20),
                button(text("Clear history…")).on_press(Message::OpenDialog),
            ]
            .spacing(20)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        let body = text("This permanently clears the demo history.").size(16);

        modal::styled_overlay_view(
            base,
            &self.dialog(),
            Some(body.into()),
            &self.theme_config.overlay,
        )
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Subscription for window events (keyboard dismissal routing)
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen().map(Message::Event)
    }
}
