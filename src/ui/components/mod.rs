//! Reusable UI components

pub mod dropdown_component;
pub mod status_bar;

// Component exports
pub use dropdown_component::{DropdownBehavior, DropdownComponent};
pub use status_bar::StatusBar;
