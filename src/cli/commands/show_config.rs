use std::path::Path;

use crate::config::Config;
use crate::ui::Style;

/// Prints the resolved configuration to stdout.
pub fn print_config(config: &Config, config_path: &Path) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}             {}",
        Style::label("file"),
        Style::secondary(config_path.display())
    );
    println!(
        "  {}        {}",
        Style::label("local_url"),
        Style::value(&config.local_url)
    );
    println!(
        "  {}      {}",
        Style::label("default_url"),
        Style::value(&config.default_url)
    );
    println!(
        "  {}      {}",
        Style::label("local_short"),
        Style::value(config.local_short_enabled)
    );
    println!(
        "  {}  {}",
        Style::label("short_threshold"),
        Style::value(config.short_threshold)
    );
    println!(
        "  {}     {}",
        Style::label("timeout_secs"),
        Style::value(config.timeout.as_secs())
    );
    println!(
        "  {}          {}",
        Style::label("api_key"),
        if config.api_key.is_some() {
            Style::value("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
}
