// src/app/update/shell.rs
//! Modal closing, keyboard, toast, animation and display settings handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle shell-level messages
    pub fn handle_shell(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::CloseModal => {
                self.ui.close_modal();
                Some(Task::none())
            }

            Message::KeyPressed(Key::Named(Named::Escape), _) => {
                self.ui.close_modal();
                Some(Task::none())
            }
            Message::KeyPressed(..) => Some(Task::none()),

            Message::HideToast(seq) => {
                self.ui.hide_toast(*seq);
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.modal_animation.tick(Instant::now());
                Some(Task::none())
            }

            Message::ToggleTheme => {
                let display = &mut self.core.settings.display;
                display.dark_mode = !display.dark_mode;
                tracing::info!("Dark mode: {}", display.dark_mode);
                self.persist_settings();
                Some(Task::none())
            }

            Message::ToggleLanguage => {
                let language = self.core.locale.language.next();
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                tracing::info!("Language changed to: {}", language.code());
                self.persist_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
