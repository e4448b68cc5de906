//! Core UI functionality for the droplist application.
//!
//! This module contains the building blocks the widget components sit
//! on: the component trait, action definitions, the terminal event pump,
//! and the document-level click observation registry.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`click_router`] - Terminal-wide click watches scoped to widget open state
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard/mouse input handling

// Core UI modules
pub mod actions;
pub mod click_router;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use click_router::{ClickRouter, WidgetId};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
