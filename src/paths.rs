//! XDG-style path utilities for configuration.
//!
//! Paths follow XDG Base Directory conventions on every platform
//! rather than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "enes";

/// Returns the configuration directory for enes.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/enes` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/enes` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
