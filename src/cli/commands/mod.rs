//! Command implementations.

/// Resolved configuration display.
pub mod show_config;

/// Translation command handler.
pub mod translate;
