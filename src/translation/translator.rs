use super::client::{TranslationBackend, TranslationRequest};
use super::detect::{DetectionError, detect_language};
use super::error::TranslateError;
use super::language::Language;

/// Outcome of resolving the languages for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// The result is known without contacting a service.
    Done(String),
    /// The text must be sent to a translation service.
    Request(TranslationRequest),
}

/// Resolves source and target languages for `text`.
///
/// Whitespace-only text resolves to an empty result and identical source
/// and target languages resolve to the text itself. Neither needs a service.
pub fn prepare(
    text: &str,
    source: Option<Language>,
    target: Option<Language>,
) -> Result<Prepared, DetectionError> {
    if text.trim().is_empty() {
        return Ok(Prepared::Done(String::new()));
    }

    let source = match source {
        Some(source) => source,
        None => detect_language(text)?,
    };
    let target = target.unwrap_or_else(|| source.opposite());

    if source == target {
        return Ok(Prepared::Done(text.to_string()));
    }

    Ok(Prepared::Request(TranslationRequest {
        text: text.to_string(),
        source,
        target,
    }))
}

/// Translates English and Spanish text through a [`TranslationBackend`].
pub struct Translator<B> {
    backend: B,
}

impl<B: TranslationBackend> Translator<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Translates `text`, detecting the source and choosing the target when
    /// they are not given. `endpoint` of `None` uses the backend default.
    pub async fn translate(
        &self,
        text: &str,
        source: Option<Language>,
        target: Option<Language>,
        endpoint: Option<&str>,
    ) -> Result<String, TranslateError> {
        match prepare(text, source, target)? {
            Prepared::Done(output) => Ok(output),
            Prepared::Request(request) => self.backend.translate(&request, endpoint).await,
        }
    }
}
