//! Reusable widgets

pub mod toast;

pub use toast::{TOAST_DURATION, Toast, view_toast};
