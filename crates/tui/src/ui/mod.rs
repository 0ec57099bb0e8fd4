//! UI rendering module for the TUI application.
//!
//! Holds the main layout, the runtime loop, components, themes and
//! shared helpers.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
