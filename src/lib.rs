//! Droplist - a dropdown select widget for the terminal
//!
//! This library provides a small interactive playground for a dropdown
//! select control rendered with Ratatui: a toggle button, a collapsible
//! list of items, and two interaction styles shown side by side — one
//! that tracks the selection and dismisses on outside clicks, and one
//! that only toggles. It includes the configuration, logging, and event
//! plumbing the widget runs on.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Item labels, widget geometry, and default values
//! * [`logger`] - File logging setup
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Item labels, widget geometry, and default values
pub mod constants;

/// File logging gated by configuration
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for color handling
pub mod utils;
