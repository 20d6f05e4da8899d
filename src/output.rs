//! Global output configuration and utilities.
//!
//! - The translation is the only thing written to stdout
//! - Status messages, the spinner and errors go to stderr
//! - Status messages only appear in verbose mode
//! - Colors are off with `--no-color`, `NO_COLOR`, or when stderr is not a terminal

use std::io::IsTerminal;
use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Print status messages to stderr.
    pub verbose: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal(),
        }
    }
}

impl OutputConfig {
    /// Builds the configuration from CLI flags on top of the environment defaults.
    pub fn from_flags(verbose: bool, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            verbose,
            no_color: no_color || defaults.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_verbose() -> bool {
    config().verbose
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (verbose mode only).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if $crate::output::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
