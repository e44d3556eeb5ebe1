//! UI module for the customer panel
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod animation;
pub mod components;
pub mod theme;
pub mod widgets;
