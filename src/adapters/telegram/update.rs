//! Inbound Telegram update DTOs.
//!
//! Only the fields this system reads are modeled; everything else in the
//! update payload is ignored during deserialization.

use serde::Deserialize;

/// One webhook update from the Bot API.
///
/// Updates without a `message` envelope (edits, callbacks, member events)
/// are acknowledged and otherwise ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// The new incoming message, if this update carries one.
    pub message: Option<IncomingMessage>,
}

/// The message envelope of an update.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    /// Chat the message was sent in.
    pub chat: Chat,

    /// Text body; absent for stickers, photos and the like.
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,
}
