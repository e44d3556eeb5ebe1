// src/app/update/form.rs
//! Customer form modal handlers

use iced::Task;
use tracing::debug;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::cache::{CUSTOMERS_KEY, QueryStore};
use crate::features::{ReferenceKind, SubmitOutcome};
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle form modal messages
    pub fn handle_form(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenAddCustomer => Some(self.open_form(None)),

            Message::OpenEditCustomer(customer) => Some(self.open_form(Some(customer.clone()))),

            Message::ReferenceLoaded(session, kind, result) => {
                match self.ui.form_for(*session) {
                    Some(form) => form.set_reference(*kind, result.clone()),
                    None => debug!("Dropping {:?} for closed form #{}", kind, session),
                }
                Some(Task::none())
            }

            Message::FormFieldChanged(field, value) => {
                if let Some(form) = self.ui.form_mut() {
                    form.set_field(*field, value.clone());
                }
                Some(Task::none())
            }

            Message::SubmitForm => {
                let Some(form) = self.ui.form_mut() else {
                    return Some(Task::none());
                };
                let session = form.session();
                let Some(request) = form.submit() else {
                    debug!("Form #{} submit refused", session);
                    return Some(Task::none());
                };

                let api = self.core.api.clone();
                Some(Task::perform(
                    helpers::write_customer(api, request),
                    move |result| Message::FormSubmitted(session, result),
                ))
            }

            Message::FormSubmitted(session, result) => {
                let outcome = match self.ui.form_for(*session) {
                    Some(form) => form.complete(result.clone(), &mut self.core.customers),
                    None => {
                        debug!("Write result for closed form #{} arrived late", session);
                        // The server state changed even though nobody is watching the form
                        if result.is_ok() && self.core.customers.invalidate(CUSTOMERS_KEY) {
                            return Some(self.refetch_customers());
                        }
                        return Some(Task::none());
                    }
                };

                match outcome {
                    SubmitOutcome::Close => {
                        self.ui.close_modal();
                        let saved = self.core.locale.get(Key::CustomerSaved);
                        let toast = self.flash_toast(Toast::success(saved));
                        Some(Task::batch([self.refetch_customers(), toast]))
                    }
                    SubmitOutcome::StayOpen | SubmitOutcome::Ignored => Some(Task::none()),
                }
            }

            _ => None,
        }
    }

    /// Mount the form and start loading both reference lists for it
    fn open_form(&mut self, customer: Option<crate::api::Customer>) -> Task<Message> {
        let session = self.ui.open_form(customer.as_ref());
        Task::batch([
            self.load_reference(session, ReferenceKind::Countries),
            self.load_reference(session, ReferenceKind::Titles),
        ])
    }
}
