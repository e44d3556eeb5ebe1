// src/app/state.rs
//! Application state definitions

use crate::api::{ApiClient, Customer};
use crate::cache::QueryCache;
use crate::features::{DeleteConfirmation, FormModal, Settings};
use crate::i18n::Locale;
use crate::ui::animation::FadeAnimation;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, API client, query cache)
    pub core: CoreState,
    /// UI state (open modal, toast, animations)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub api: ApiClient,
    /// Server data shared between the table and the modals
    pub customers: QueryCache<Vec<Customer>>,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let api = ApiClient::new(settings.api.effective_base_url(), settings.api.timeout());
        tracing::info!("Using customer API at {}", api.base_url());

        Self {
            settings,
            locale,
            api,
            customers: QueryCache::new(),
        }
    }
}

/// The overlay currently shown above the table
#[derive(Debug)]
pub enum Modal {
    Form(FormModal),
    Delete(DeleteConfirmation),
}

impl Modal {
    pub fn session(&self) -> u64 {
        match self {
            Modal::Form(form) => form.session(),
            Modal::Delete(dialog) => dialog.session(),
        }
    }
}

/// UI view state
pub struct UiState {
    /// At most one modal; opening another replaces it
    pub modal: Option<Modal>,
    /// Fade-in for the modal backdrop and box
    pub modal_animation: FadeAnimation,
    pub toast: Option<Toast>,
    next_session: u64,
    toast_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            modal: None,
            modal_animation: FadeAnimation::new(),
            toast: None,
            next_session: 0,
            toast_seq: 0,
        }
    }

    fn allocate_session(&mut self) -> u64 {
        self.next_session += 1;
        self.next_session
    }

    fn replace_modal(&mut self, modal: Modal) {
        if let Some(previous) = self.modal.replace(modal) {
            tracing::debug!("Modal #{} replaced", previous.session());
        }
        self.modal_animation.restart();
    }

    /// Mount the form (Edit when a customer is given) and return its session id
    pub fn open_form(&mut self, customer: Option<&Customer>) -> u64 {
        let session = self.allocate_session();
        self.replace_modal(Modal::Form(FormModal::open(session, customer)));
        session
    }

    pub fn open_delete(&mut self, customer_id: &str) -> u64 {
        let session = self.allocate_session();
        self.replace_modal(Modal::Delete(DeleteConfirmation::open(session, customer_id)));
        session
    }

    pub fn close_modal(&mut self) -> Option<Modal> {
        let closed = self.modal.take();
        if let Some(modal) = &closed {
            tracing::info!("Modal #{} closed", modal.session());
            self.modal_animation.reset();
        }
        closed
    }

    /// The open form, whatever its session
    pub fn form_mut(&mut self) -> Option<&mut FormModal> {
        match &mut self.modal {
            Some(Modal::Form(form)) => Some(form),
            _ => None,
        }
    }

    /// The open form, only if it is the instance `session` was issued for
    pub fn form_for(&mut self, session: u64) -> Option<&mut FormModal> {
        self.form_mut().filter(|form| form.session() == session)
    }

    pub fn delete_mut(&mut self) -> Option<&mut DeleteConfirmation> {
        match &mut self.modal {
            Some(Modal::Delete(dialog)) => Some(dialog),
            _ => None,
        }
    }

    pub fn delete_for(&mut self, session: u64) -> Option<&mut DeleteConfirmation> {
        self.delete_mut().filter(|dialog| dialog.session() == session)
    }

    /// Show a toast and return its sequence number for the matching hide
    pub fn show_toast(&mut self, toast: Toast) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(toast);
        self.toast_seq
    }

    /// Hide the toast only if no newer one replaced it
    pub fn hide_toast(&mut self, seq: u64) -> bool {
        if seq == self.toast_seq && self.toast.is_some() {
            self.toast = None;
            true
        } else {
            false
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.modal_animation.is_animating()
    }
}
