//! Reqwest-backed vibe source adapter.
//!
//! This adapter owns transport details only: prompt assembly, bearer
//! authentication, timeout and HTTP error mapping, and JSON decoding of the
//! completion payload. At the port boundary every failure collapses into
//! the fixed error reply; the typed [`VibeSourceError`] stays internal to
//! keep the mapping testable.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use crate::domain::ports::{PlaceContext, VIBE_ERROR_REPLY, VibeSource};

use super::dto::{CompletionRequest, CompletionResponse, Message};

/// Default completion endpoint.
const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Default completion model.
const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
/// Environment variable the credential is read from.
const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Sampling temperature for vibe rewrites.
const TEMPERATURE: f32 = 0.7;

/// Errors raised while requesting a completion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VibeSourceError {
    /// No bearer credential is configured.
    #[error("no completion API credential is configured")]
    MissingCredential,
    /// The request never produced an HTTP response.
    #[error("completion transport failed: {message}")]
    Transport {
        /// Underlying transport detail.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned status {code}: {message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Body preview for the log line.
        message: String,
    },
    /// The payload did not carry a generated message.
    #[error("completion payload could not be decoded: {message}")]
    Decode {
        /// Underlying decode detail.
        message: String,
    },
}

impl VibeSourceError {
    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for non-success statuses.
    pub fn status(code: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            code: code.as_u16(),
            message: message.into(),
        }
    }

    /// Helper for decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Configuration for the completion adapter.
#[derive(Debug, Clone)]
pub struct VibeConfig {
    /// Completion endpoint URL.
    pub endpoint: Url,
    /// Bearer credential; `None` makes every request fail with the error
    /// reply rather than at construction time.
    pub api_key: Option<String>,
    /// Model identifier sent with each request.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for VibeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl VibeConfig {
    /// Defaults with the credential read from `OPENROUTER_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            ..Self::default()
        }
    }

    /// Set the bearer credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT)
        .unwrap_or_else(|error| panic!("default completion endpoint is invalid: {error}"))
}

/// Vibe source adapter performing one POST per description request.
pub struct CompletionVibeSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    model: String,
}

impl CompletionVibeSource {
    /// Build an adapter using a reqwest client with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: VibeConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_key: config.api_key,
            model: config.model,
        })
    }

    async fn request_vibe(&self, place: &PlaceContext) -> Result<String, VibeSourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(VibeSourceError::MissingCredential)?;

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system_prompt().to_owned(),
                },
                Message {
                    role: "user",
                    content: user_prompt(place),
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(VibeSourceError::status(status, body_preview(body.as_ref())));
        }

        let decoded: CompletionResponse = serde_json::from_slice(body.as_ref())
            .map_err(|error| VibeSourceError::decode(format!("invalid JSON payload: {error}")))?;
        decoded
            .into_first_content()
            .map(|content| content.trim().to_owned())
            .ok_or_else(|| VibeSourceError::decode("response carried no choices"))
    }
}

#[async_trait]
impl VibeSource for CompletionVibeSource {
    async fn describe(&self, place: &PlaceContext) -> String {
        match self.request_vibe(place).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, place = %place.name, "vibe generation failed");
                VIBE_ERROR_REPLY.to_owned()
            }
        }
    }
}

fn system_prompt() -> &'static str {
    "You are a creative tourism copywriter. Rewrite place descriptions in an \
     engaging, welcoming tone for travellers browsing a discovery app."
}

fn user_prompt(place: &PlaceContext) -> String {
    format!(
        "Rewrite the short description \"{current}\" for the place \"{name}\" at \
         \"{address}\" in a creative, captivating, touristy tone. Keep the answer \
         to two clear sentences.",
        current = place.current_description,
        name = place.name,
        address = place.address,
    )
}

fn map_transport_error(error: reqwest::Error) -> VibeSourceError {
    VibeSourceError::transport(error.to_string())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network prompt and mapping helpers.

    use super::*;
    use crate::domain::ports::is_error_reply;
    use rstest::rstest;

    fn context() -> PlaceContext {
        PlaceContext {
            name: "Meron Coffee".to_owned(),
            address: "Str. Emil Isac 2, Cluj-Napoca, Cluj".to_owned(),
            current_description: "Specialty coffee roasted in-house.".to_owned(),
        }
    }

    #[test]
    fn user_prompt_carries_name_address_and_description() {
        let prompt = user_prompt(&context());
        assert!(prompt.contains("Meron Coffee"));
        assert!(prompt.contains("Str. Emil Isac 2, Cluj-Napoca, Cluj"));
        assert!(prompt.contains("Specialty coffee roasted in-house."));
        assert!(prompt.contains("two clear sentences"));
    }

    #[rstest]
    #[case(StatusCode::TOO_MANY_REQUESTS)]
    #[case(StatusCode::UNAUTHORIZED)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_errors_keep_the_code_and_preview(#[case] status: StatusCode) {
        let error = VibeSourceError::status(status, body_preview(b"{\"error\": \"nope\"}"));
        match error {
            VibeSourceError::Status { code, message } => {
                assert_eq!(code, status.as_u16());
                assert!(message.contains("nope"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[test]
    fn body_preview_collapses_whitespace_and_truncates() {
        let long = "word ".repeat(100);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 163);
    }

    #[tokio::test]
    async fn missing_credential_collapses_into_the_error_reply() {
        let source = CompletionVibeSource::new(VibeConfig::default()).expect("client builds");
        let reply = source.describe(&context()).await;
        assert!(is_error_reply(&reply));
    }

    #[test]
    fn config_with_api_key_sets_the_credential() {
        let config = VibeConfig::default().with_api_key("sk-test");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
