//! In-memory conversation store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ChatId;
use crate::ports::ConversationStore;

/// Conversation store backed by a mutex-guarded map.
///
/// One mutex covers the whole map, so operations on any entry are fully
/// serialized and updates to a single chat's entry can never interleave.
/// All state is lost on restart, which matches the conversation lifecycle:
/// a forgotten chat simply starts over at the link prompt.
#[derive(Default)]
pub struct InMemoryConversationStore {
    entries: Mutex<HashMap<ChatId, Conversation>>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, chat_id: ChatId) -> Option<Conversation> {
        self.entries.lock().await.get(&chat_id).cloned()
    }

    async fn put(&self, chat_id: ChatId, conversation: Conversation) {
        self.entries.lock().await.insert(chat_id, conversation);
    }

    async fn remove(&self, chat_id: ChatId) {
        self.entries.lock().await.remove(&chat_id);
    }
}
