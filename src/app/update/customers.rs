// src/app/update/customers.rs
//! Customer collection fetch handlers

use iced::Task;
use tracing::warn;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle customer-list messages
    pub fn handle_customers(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::LoadCustomers => Some(self.refetch_customers()),

            Message::CustomersLoaded(ticket, result) => {
                match result {
                    Ok(customers) => {
                        tracing::debug!("Fetched {} customers", customers.len());
                    }
                    Err(e) => warn!("Failed to fetch customers: {}", e),
                }
                self.core.customers.resolve(ticket, result.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
