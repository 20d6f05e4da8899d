mod client;
mod detect;
mod endpoint;
mod error;
mod fallback;
mod language;
mod translator;

pub use client::{LibreTranslateClient, TranslationBackend, TranslationRequest};
pub use detect::{DetectionError, detect_language};
pub use endpoint::{EndpointSelection, count_words, select_endpoint};
pub use error::TranslateError;
pub use fallback::{FallbackController, FallbackError};
pub use language::{Language, SUPPORTED_LANGUAGES, print_languages};
pub use translator::{Prepared, Translator, prepare};
