use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr activity indicator shown while a translation request is in flight.
///
/// The message is updated when the request moves from the local server to
/// the default endpoint. The spinner is cleared before the translation is
/// written to stdout, and on drop if an error unwinds the command first.
/// indicatif hides it when stderr is not a terminal, so piped runs stay clean.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        Self::with_target(message, ProgressDrawTarget::stderr())
    }

    fn with_target(message: &str, target: ProgressDrawTarget) -> Self {
        let progress_bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);
        progress_bar.set_style(style);
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Replaces the text next to the spinner, e.g. when retrying elsewhere.
    pub fn set_message(&self, message: &str) {
        self.progress_bar.set_message(message.to_string());
    }

    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_follows_fallback() {
        let spinner = Spinner::with_target("Translating...", ProgressDrawTarget::hidden());
        assert_eq!(spinner.progress_bar.message(), "Translating...");

        spinner.set_message("Retrying with default endpoint...");
        assert_eq!(
            spinner.progress_bar.message(),
            "Retrying with default endpoint..."
        );

        spinner.stop();
        assert!(spinner.progress_bar.is_finished());
    }
}
