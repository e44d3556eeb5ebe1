//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::cache::CUSTOMERS_KEY;
use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, Modal};
use state::{CoreState, UiState};

impl App {
    /// Create new application instance from the persisted settings
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let core = CoreState::new(settings, locale);
        let mut app = Self {
            core,
            ui: UiState::new(),
        };

        // The table observes the customer collection for the whole session
        app.core.customers.observe(CUSTOMERS_KEY);
        let init_task = app.refetch_customers();

        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for keyboard events and the modal fade
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // Animation subscription (~60fps only while fading)
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, animation_sub])
    }
}
