// src/app/update/delete.rs
//! Delete confirmation handlers

use iced::Task;
use tracing::{debug, error};

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::cache::{CUSTOMERS_KEY, QueryStore};
use crate::features::DeleteOutcome;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle delete confirmation messages
    pub fn handle_delete(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestDeleteCustomer(id) => {
                self.ui.open_delete(id);
                Some(Task::none())
            }

            Message::ConfirmDelete => {
                let Some(dialog) = self.ui.delete_mut() else {
                    return Some(Task::none());
                };
                let session = dialog.session();
                let Some(id) = dialog.confirm() else {
                    debug!("Delete #{} already in flight", session);
                    return Some(Task::none());
                };

                let api = self.core.api.clone();
                Some(Task::perform(
                    helpers::delete_customer(api, id),
                    move |result| Message::DeleteFinished(session, result),
                ))
            }

            Message::DeleteFinished(session, result) => {
                let outcome = match self.ui.delete_for(*session) {
                    Some(dialog) => dialog.complete(result.clone(), &mut self.core.customers),
                    None => {
                        debug!("Delete result for closed dialog #{} arrived late", session);
                        match result {
                            Ok(()) if self.core.customers.invalidate(CUSTOMERS_KEY) => {
                                return Some(self.refetch_customers());
                            }
                            Ok(()) => {}
                            Err(e) => {
                                error!("Delete from closed dialog #{} failed: {}", session, e)
                            }
                        }
                        return Some(Task::none());
                    }
                };

                match outcome {
                    DeleteOutcome::Close => {
                        self.ui.close_modal();
                        let deleted = self.core.locale.get(Key::CustomerDeleted);
                        let toast = self.flash_toast(Toast::success(deleted));
                        Some(Task::batch([self.refetch_customers(), toast]))
                    }
                    DeleteOutcome::StayOpen => {
                        let failed = self.core.locale.get(Key::DeleteFailed);
                        Some(self.flash_toast(Toast::error(failed)))
                    }
                    DeleteOutcome::Ignored => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}
