//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::{Customer, CustomerField};
use crate::cache::FetchTicket;
use crate::features::ReferenceKind;

/// Application messages
///
/// Results of async work carry the session id of the modal they were issued
/// for, so results for a modal that has since closed can be told apart.
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Customers ============
    /// (Re)fetch the customer collection
    LoadCustomers,
    /// Customer collection fetch finished
    CustomersLoaded(FetchTicket, Result<Vec<Customer>, String>),

    // ============ Modals ============
    /// Open the form in Add mode
    OpenAddCustomer,
    /// Open the form in Edit mode for this customer
    OpenEditCustomer(Customer),
    /// Open the delete confirmation for this customer id
    RequestDeleteCustomer(String),
    /// Close whichever modal is open
    CloseModal,

    // ============ Customer form ============
    /// Reference list fetched for form session
    ReferenceLoaded(u64, ReferenceKind, Result<Vec<String>, String>),
    /// Controlled input changed
    FormFieldChanged(CustomerField, String),
    /// Submit the open form
    SubmitForm,
    /// Create/update finished for form session
    FormSubmitted(u64, Result<(), String>),

    // ============ Delete confirmation ============
    /// Confirm the open delete dialog
    ConfirmDelete,
    /// Delete finished for dialog session
    DeleteFinished(u64, Result<(), String>),

    // ============ Shell ============
    /// Switch between dark and light
    ToggleTheme,
    /// Cycle interface language
    ToggleLanguage,
    /// Hide the toast with this sequence number
    HideToast(u64),
    /// Animation frame tick
    AnimationTick,
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            Self::LoadCustomers => simple!("LoadCustomers"),
            Self::CustomersLoaded(ticket, result) => match result {
                Ok(v) => simple!("CustomersLoaded", "{}, {} customers", ticket.key(), v.len()),
                Err(e) => simple!("CustomersLoaded", "{}, err={}", ticket.key(), e),
            },

            Self::OpenAddCustomer => simple!("OpenAddCustomer"),
            Self::OpenEditCustomer(c) => simple!("OpenEditCustomer", "id={}", c.id),
            Self::RequestDeleteCustomer(id) => simple!("RequestDeleteCustomer", "id={}", id),
            Self::CloseModal => simple!("CloseModal"),

            Self::ReferenceLoaded(session, kind, result) => match result {
                Ok(v) => simple!("ReferenceLoaded", "#{}, {:?}, {} items", session, kind, v.len()),
                Err(e) => simple!("ReferenceLoaded", "#{}, {:?}, err={}", session, kind, e),
            },
            // Field values may be personal data; only log which field changed
            Self::FormFieldChanged(field, _) => simple!("FormFieldChanged", "{:?}", field),
            Self::SubmitForm => simple!("SubmitForm"),
            Self::FormSubmitted(session, result) => {
                simple!("FormSubmitted", "#{}, ok={}", session, result.is_ok())
            }

            Self::ConfirmDelete => simple!("ConfirmDelete"),
            Self::DeleteFinished(session, result) => {
                simple!("DeleteFinished", "#{}, ok={}", session, result.is_ok())
            }

            Self::ToggleTheme => simple!("ToggleTheme"),
            Self::ToggleLanguage => simple!("ToggleLanguage"),
            Self::HideToast(seq) => simple!("HideToast", "{}", seq),
            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
        }
    }
}
