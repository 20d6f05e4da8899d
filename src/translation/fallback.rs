//! Local-first translation with a single retry against the default endpoint.

use thiserror::Error;

use super::client::TranslationBackend;
use super::detect::DetectionError;
use super::endpoint::EndpointSelection;
use super::error::TranslateError;
use super::language::Language;
use super::translator::Translator;

/// Terminal failure after the fallback policy has run.
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("Language detection failed: {0}")]
    Detection(DetectionError),

    #[error("Translation failed: unable to reach translation service.")]
    Unreachable { source: TranslateError },

    #[error("Translation failed: {0}")]
    Failed(TranslateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TrySelected,
    TryDefault,
}

/// Drives a translation through the selected endpoint and, for a local
/// endpoint, one retry against the default endpoint.
pub struct FallbackController<'a, B> {
    translator: &'a Translator<B>,
    local_url: &'a str,
}

impl<'a, B: TranslationBackend> FallbackController<'a, B> {
    pub const fn new(translator: &'a Translator<B>, local_url: &'a str) -> Self {
        Self {
            translator,
            local_url,
        }
    }

    /// Runs the translation.
    ///
    /// `on_fallback` is called with the local failure just before the retry.
    pub async fn run<F>(
        &self,
        text: &str,
        source: Option<Language>,
        target: Option<Language>,
        selection: &EndpointSelection,
        mut on_fallback: F,
    ) -> Result<String, FallbackError>
    where
        F: FnMut(&TranslateError),
    {
        let mut state = State::TrySelected;

        loop {
            let endpoint = match state {
                State::TrySelected => selection.url(),
                State::TryDefault => None,
            };

            let err = match self.translator.translate(text, source, target, endpoint).await {
                Ok(output) => return Ok(output),
                Err(TranslateError::Detection(e)) => return Err(FallbackError::Detection(e)),
                Err(e) => e,
            };

            state = match state {
                State::TrySelected if self.is_local(selection) => {
                    on_fallback(&err);
                    State::TryDefault
                }
                State::TrySelected => return Err(FallbackError::Unreachable { source: err }),
                State::TryDefault => return Err(FallbackError::Failed(err)),
            };
        }
    }

    // Compared by URL, so an explicit URL naming the local service falls back too.
    fn is_local(&self, selection: &EndpointSelection) -> bool {
        selection.url() == Some(self.local_url)
    }
}
