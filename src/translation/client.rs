use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::TranslateError;
use super::language::Language;

/// A fully resolved request, ready to send to a translation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

/// Something that can translate a resolved request at a given endpoint.
///
/// `endpoint` is the base URL of the service; `None` means the backend's
/// default endpoint.
#[allow(async_fn_in_trait)]
pub trait TranslationBackend {
    async fn translate(
        &self,
        request: &TranslationRequest,
        endpoint: Option<&str>,
    ) -> Result<String, TranslateError>;
}

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP client for LibreTranslate-compatible services.
pub struct LibreTranslateClient {
    client: Client,
    default_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(
        default_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(client, default_url, api_key))
    }

    /// Wraps an already configured HTTP client.
    pub const fn with_http_client(
        client: Client,
        default_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            default_url,
            api_key,
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    fn translate_url(base: &str) -> String {
        format!("{}/translate", base.trim_end_matches('/'))
    }
}

impl TranslationBackend for LibreTranslateClient {
    async fn translate(
        &self,
        request: &TranslationRequest,
        endpoint: Option<&str>,
    ) -> Result<String, TranslateError> {
        let base = endpoint.unwrap_or(&self.default_url);
        let url = Self::translate_url(base);

        let body = LibreTranslateRequest {
            q: &request.text,
            source: request.source.code(),
            target: request.target.code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(base, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text).map_or_else(
                |_| status.canonical_reason().unwrap_or("request failed").to_string(),
                |e| single_line(&e.error),
            );

            return Err(TranslateError::Service {
                endpoint: base.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| transport_error(base, e))?;

        let decoded: LibreTranslateResponse =
            serde_json::from_str(&text).map_err(|e| TranslateError::InvalidResponse {
                endpoint: base.to_string(),
                message: e.to_string(),
            })?;

        Ok(decoded.translated_text)
    }
}

// Error text ends up on one stderr line.
fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn transport_error(endpoint: &str, source: reqwest::Error) -> TranslateError {
    if source.is_timeout() {
        TranslateError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        TranslateError::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}
