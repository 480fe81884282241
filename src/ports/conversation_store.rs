//! Conversation store port - per-chat state storage.
//!
//! Replaces an ambient global mapping with an injectable interface. State
//! is ephemeral by design: implementations are expected to be in-memory and
//! to forget everything on restart.

use async_trait::async_trait;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ChatId;

/// Port for storing the per-chat [`Conversation`] between messages.
///
/// # Concurrency
///
/// The host may handle updates for different chats concurrently, and
/// duplicate updates for the same chat are possible. Implementations must
/// guarantee that updates to a single chat's entry do not interleave (the
/// in-memory adapter serializes all operations behind one mutex).
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the stored conversation for a chat, if any.
    async fn get(&self, chat_id: ChatId) -> Option<Conversation>;

    /// Stores (or replaces) the conversation for a chat.
    async fn put(&self, chat_id: ChatId, conversation: Conversation);

    /// Removes any stored conversation for a chat.
    async fn remove(&self, chat_id: ChatId);
}
