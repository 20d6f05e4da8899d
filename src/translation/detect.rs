//! Source language auto-detection.
//!
//! Detection runs in two stages. `whatlang` guesses the language of the
//! whole text; English and Spanish answers are taken as they are. Short
//! phrases rarely give `whatlang` a reliable answer, so when its guess is an
//! unreliable third language the text is scored again against English and
//! Spanish only. A reliable third language, or text neither profile matches,
//! is settled by the share of ASCII characters.

use thiserror::Error;
use whatlang::{Detector, Lang};

use super::language::Language;

/// Share of ASCII characters above which undecided text is treated as English.
const ASCII_ENGLISH_RATIO: f64 = 0.9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("no letters to detect a language from")]
    NoFeatures,
}

/// Detects whether `text` is English or Spanish.
///
/// # Errors
///
/// Returns [`DetectionError::NoFeatures`] when the text has no alphabetic
/// characters at all.
pub fn detect_language(text: &str) -> Result<Language, DetectionError> {
    if !text.chars().any(char::is_alphabetic) {
        return Err(DetectionError::NoFeatures);
    }

    let Some(info) = whatlang::detect(text) else {
        return Ok(ascii_fallback(text));
    };

    if let Some(language) = supported(info.lang()) {
        return Ok(language);
    }

    if !info.is_reliable() {
        let narrowed = Detector::with_allowlist(vec![Lang::Eng, Lang::Spa]).detect_lang(text);
        if let Some(language) = narrowed.and_then(supported) {
            return Ok(language);
        }
    }

    Ok(ascii_fallback(text))
}

const fn supported(lang: Lang) -> Option<Language> {
    match lang {
        Lang::Eng => Some(Language::En),
        Lang::Spa => Some(Language::Es),
        _ => None,
    }
}

fn ascii_fallback(text: &str) -> Language {
    if ascii_ratio(text) > ASCII_ENGLISH_RATIO {
        Language::En
    } else {
        Language::Es
    }
}

fn ascii_ratio(text: &str) -> f64 {
    let total = text.chars().count().max(1);
    let ascii = text.chars().filter(char::is_ascii).count();
    ascii as f64 / total as f64
}
