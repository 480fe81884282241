//! Telegram Bot API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::ValidationError;

/// Telegram transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather
    pub bot_token: Secret<String>,

    /// Bot API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for text sends, in seconds
    #[serde(default = "default_text_timeout_secs")]
    pub text_timeout_secs: u64,

    /// Timeout for document uploads, in seconds
    #[serde(default = "default_document_timeout_secs")]
    pub document_timeout_secs: u64,
}

impl TelegramConfig {
    /// Creates a configuration with the given token and defaults elsewhere.
    pub fn with_token(bot_token: Secret<String>) -> Self {
        Self {
            bot_token,
            api_base_url: default_api_base_url(),
            text_timeout_secs: default_text_timeout_secs(),
            document_timeout_secs: default_document_timeout_secs(),
        }
    }

    /// Validates the Telegram configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bot_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingBotToken);
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_text_timeout_secs() -> u64 {
    5
}

fn default_document_timeout_secs() -> u64 {
    30
}
