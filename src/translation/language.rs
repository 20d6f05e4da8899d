//! Supported languages.

use clap::ValueEnum;
use std::fmt;

use crate::ui::Style;

/// The two languages this tool translates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    En,
    Es,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::En, Language::Es];

impl Language {
    /// ISO 639-1 code as sent to the translation service.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
        }
    }

    /// The other supported language.
    pub const fn opposite(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for language in SUPPORTED_LANGUAGES {
        println!(
            "  {:5} {}",
            Style::code(language.code()),
            Style::secondary(language.name())
        );
    }
}
