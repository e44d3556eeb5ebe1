//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod customer_form;
pub mod delete;
pub mod reference;
pub mod settings;

pub use customer_form::{FormModal, SubmitOutcome, WriteRequest};
pub use delete::{DeleteConfirmation, DeleteOutcome};
pub use reference::ReferenceKind;
pub use settings::Settings;
