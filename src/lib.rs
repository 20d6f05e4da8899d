//! # enes - English/Spanish Translation CLI
//!
//! `enes` translates text between English and Spanish through any
//! LibreTranslate-compatible HTTP service. Short texts go to a local server
//! first; if that server fails, the request is retried once against the
//! default endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Auto-detect the source language
//! enes "Hola amigo"
//!
//! # Translate from stdin
//! cat notas.txt | enes --target en
//!
//! # Always use a specific server
//! enes -u https://lt.example.com "Good morning"
//! ```
//!
//! ## Configuration
//!
//! Settings come from CLI flags, then `LT_*` environment variables, then
//! `~/.config/enes/config.toml`:
//!
//! ```toml
//! [lt]
//! local_url = "http://localhost:5000"
//! default_url = "https://libretranslate.com"
//! short_threshold = 200
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (verbosity, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Language detection, endpoint selection and the LibreTranslate client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
