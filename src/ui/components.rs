//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! They are the only layer that should import from `crate::app`.

pub mod customer_form;
pub mod customers_table;
pub mod delete_dialog;
pub mod header_bar;
mod modal_overlay;
