//! Endpoint selection between explicit, local and default services.

use crate::config::Config;

/// Which translation service a request goes to first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointSelection {
    /// A URL supplied by the caller.
    Explicit(String),
    /// The configured local service, chosen because the text is short.
    Local(String),
    /// The backend's default endpoint.
    Default,
}

impl EndpointSelection {
    /// The URL to pass to the backend; `None` means the default endpoint.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Explicit(url) | Self::Local(url) => Some(url),
            Self::Default => None,
        }
    }
}

/// Counts whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Chooses the endpoint for `text`.
///
/// An explicit URL always wins. Otherwise short texts go to the local
/// service when local preference is enabled; everything else uses the
/// default endpoint.
pub fn select_endpoint(text: &str, explicit: Option<&str>, config: &Config) -> EndpointSelection {
    if let Some(url) = explicit {
        return EndpointSelection::Explicit(url.to_string());
    }

    if config.local_short_enabled && count_words(text) <= config.short_threshold {
        return EndpointSelection::Local(config.local_url.clone());
    }

    EndpointSelection::Default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: usize) -> Config {
        Config {
            short_threshold: threshold,
            ..Config::default()
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_count_words_ignores_extra_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("  one   two\nthree\t four  "), 4);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = config(3);
        assert_eq!(
            select_endpoint(&words(3), None, &config),
            EndpointSelection::Local(config.local_url.clone())
        );
        assert_eq!(
            select_endpoint(&words(4), None, &config),
            EndpointSelection::Default
        );
    }

    #[test]
    fn test_zero_threshold_only_matches_empty_text() {
        let config = config(0);
        assert!(matches!(
            select_endpoint("   ", None, &config),
            EndpointSelection::Local(_)
        ));
        assert_eq!(select_endpoint("hi", None, &config), EndpointSelection::Default);
    }

    #[test]
    fn test_explicit_url_overrides_local_preference() {
        let config = config(200);
        let selection = select_endpoint("hello", Some("https://lt.example.com"), &config);
        assert_eq!(
            selection,
            EndpointSelection::Explicit("https://lt.example.com".to_string())
        );

        let long = words(500);
        let selection = select_endpoint(&long, Some("https://lt.example.com"), &config);
        assert_eq!(selection.url(), Some("https://lt.example.com"));
    }

    #[test]
    fn test_local_preference_disabled() {
        let config = Config {
            local_short_enabled: false,
            ..Config::default()
        };
        assert_eq!(select_endpoint("hello", None, &config), EndpointSelection::Default);
    }

    #[test]
    fn test_selection_url() {
        assert_eq!(EndpointSelection::Default.url(), None);
        assert_eq!(
            EndpointSelection::Local("http://localhost:5000".to_string()).url(),
            Some("http://localhost:5000")
        );
    }
}
