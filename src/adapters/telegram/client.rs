//! Telegram Bot API transport.
//!
//! Implements [`ChatTransport`] over HTTPS: `sendMessage` for text and
//! `sendDocument` (multipart upload) for attachments.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use tracing::debug;

use crate::domain::foundation::ChatId;
use crate::ports::{ChatTransport, TransportError};

/// Configuration for the Telegram transport.
#[derive(Debug, Clone)]
pub struct TelegramClientConfig {
    /// Bot token for authentication.
    bot_token: Secret<String>,
    /// Base URL for the API (default: https://api.telegram.org).
    pub base_url: String,
    /// Timeout for text sends.
    pub text_timeout: Duration,
    /// Timeout for document uploads.
    pub document_timeout: Duration,
}

impl TelegramClientConfig {
    /// Creates a new configuration with the given bot token.
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: Secret::new(bot_token.into()),
            base_url: "https://api.telegram.org".to_string(),
            text_timeout: Duration::from_secs(5),
            document_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL (tests point this at a fake server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the text send timeout.
    pub fn with_text_timeout(mut self, timeout: Duration) -> Self {
        self.text_timeout = timeout;
        self
    }

    /// Sets the document upload timeout.
    pub fn with_document_timeout(mut self, timeout: Duration) -> Self {
        self.document_timeout = timeout;
        self
    }

    /// Exposes the bot token (for building request URLs).
    fn bot_token(&self) -> &str {
        self.bot_token.expose_secret()
    }
}

/// Telegram Bot API client.
pub struct TelegramClient {
    config: TelegramClientConfig,
    client: Client,
}

impl TelegramClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: TelegramClientConfig) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the URL for a Bot API method.
    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.base_url,
            self.config.bot_token(),
            method
        )
    }

    /// Maps a reqwest error to a transport error.
    ///
    /// The URL is stripped from the error text because it embeds the bot
    /// token.
    fn request_error(err: reqwest::Error) -> TransportError {
        TransportError::request(err.without_url().to_string())
    }

    /// Turns a non-success response into a rejection error.
    async fn check_response(response: Response) -> Result<(), TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::rejected(status.as_u16(), body))
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        debug!(%chat_id, chars = text.len(), "sending text message");

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .timeout(self.config.text_timeout)
            .json(&json!({ "chat_id": chat_id.as_i64(), "text": text }))
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::check_response(response).await
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<(), TransportError> {
        debug!(%chat_id, filename, bytes = data.len(), "sending document");

        let part = Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(Self::request_error)?;
        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);

        let response = self
            .client
            .post(self.method_url("sendDocument"))
            .timeout(self.config.document_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::check_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_target_the_public_api() {
        let config = TelegramClientConfig::new("123:abc");
        assert_eq!(config.base_url, "https://api.telegram.org");
        assert_eq!(config.text_timeout, Duration::from_secs(5));
        assert_eq!(config.document_timeout, Duration::from_secs(30));
    }

    #[test]
    fn method_url_embeds_token_and_method() {
        let client = TelegramClient::new(
            TelegramClientConfig::new("123:abc").with_base_url("http://localhost:9999"),
        );
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:9999/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn config_debug_does_not_leak_the_token() {
        let config = TelegramClientConfig::new("123:secret-token");
        let debugged = format!("{config:?}");
        assert!(!debugged.contains("secret-token"));
    }
}
