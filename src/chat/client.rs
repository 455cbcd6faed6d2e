//! Core [`ChatClient`] trait and [`CohereClient`] implementation.
//!
//! `CohereClient` speaks the Cohere v2 `/v2/chat` wire format: a model id,
//! an ordered message list, and a `max_tokens` cap go out; the reply text
//! comes back in `message.content[0].text`. All connection details come from
//! [`ChatConfig`] plus the API key read at startup; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ChatConfig;

// ---------------------------------------------------------------------------
// ChatError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the chat provider.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("chat request timed out")]
    Timeout,

    /// The provider answered with a non-success HTTP status.
    #[error("chat provider returned HTTP {status}")]
    Api { status: u16 },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse chat response: {0}")]
    Parse(String),

    /// The model returned a reply with no usable text content.
    #[error("chat model returned an empty reply")]
    EmptyReply,
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ChatError::Timeout
        } else {
            ChatError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ChatClient trait
// ---------------------------------------------------------------------------

/// Async trait for chat-completion backends.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn ChatClient>`).
///
/// Each call is stateless from the model's perspective: the prompt is the
/// only message sent, and prior turns are never resent.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

// ---------------------------------------------------------------------------
// CohereClient
// ---------------------------------------------------------------------------

/// Calls the Cohere v2 `/v2/chat` endpoint.
pub struct CohereClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CohereClient {
    /// Build a client from application config and the startup API key.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`. A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn new(config: &ChatConfig, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl ChatClient for CohereClient {
    /// Send `prompt` as a single user message and return the trimmed reply.
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let url = format!("{}/v2/chat", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "max_tokens": self.max_tokens
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        extract_reply_text(&json)
    }
}

/// Pull the assistant text out of a Cohere v2 chat response body.
fn extract_reply_text(json: &serde_json::Value) -> Result<String, ChatError> {
    let text = json["message"]["content"][0]["text"]
        .as_str()
        .ok_or(ChatError::EmptyReply)?
        .trim()
        .to_string();

    if text.is_empty() {
        return Err(ChatError::EmptyReply);
    }

    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> ChatConfig {
        ChatConfig {
            base_url: "https://api.cohere.com".into(),
            model: "command-r-08-2024".into(),
            max_tokens: 600,
            timeout_secs: 30,
        }
    }

    #[test]
    fn new_builds_without_panic() {
        let _client = CohereClient::new(&make_config(), "test-key".into());
    }

    /// Verify that `CohereClient` is object-safe (usable as `dyn ChatClient`).
    #[test]
    fn client_is_object_safe() {
        let client: Box<dyn ChatClient> =
            Box::new(CohereClient::new(&make_config(), "test-key".into()));
        drop(client);
    }

    // -----------------------------------------------------------------------
    // Reply extraction
    // -----------------------------------------------------------------------

    #[test]
    fn extracts_and_trims_reply_text() {
        let json = serde_json::json!({
            "message": {
                "content": [
                    { "type": "text", "text": "  Japanese: おはよう\n" }
                ]
            }
        });
        assert_eq!(
            extract_reply_text(&json).unwrap(),
            "Japanese: おはよう"
        );
    }

    #[test]
    fn missing_content_is_an_empty_reply() {
        let json = serde_json::json!({ "message": {} });
        assert!(matches!(
            extract_reply_text(&json),
            Err(ChatError::EmptyReply)
        ));
    }

    #[test]
    fn whitespace_only_content_is_an_empty_reply() {
        let json = serde_json::json!({
            "message": { "content": [ { "type": "text", "text": "   \n " } ] }
        });
        assert!(matches!(
            extract_reply_text(&json),
            Err(ChatError::EmptyReply)
        ));
    }
}
