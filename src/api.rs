//! Customer backend API module
//!
//! Provides the REST client and the wire model for customers and reference lists.

mod client;
pub mod model;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use model::{Customer, CustomerField, CustomerPatch, NewCustomer};
