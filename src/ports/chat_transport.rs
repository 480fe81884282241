//! Chat transport port - outbound delivery to a conversation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ChatId;

/// Errors from the chat transport.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The send could not be completed.
    #[error("chat transport request failed: {0}")]
    Request(String),

    /// The chat platform rejected the send.
    #[error("chat platform returned status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl TransportError {
    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Creates a rejection error from a platform response.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected { status, body: body.into() }
    }
}

/// Port for sending messages to the chat platform.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a plain text message to a chat.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the platform cannot be reached or
    /// rejects the message.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError>;

    /// Sends a binary document attachment to a chat.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the platform cannot be reached or
    /// rejects the upload.
    async fn send_document(
        &self,
        chat_id: ChatId,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<(), TransportError>;
}
