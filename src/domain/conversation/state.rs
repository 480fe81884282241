//! Stored conversation value.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AppId;

/// The per-chat value stored between the link and date steps.
///
/// Its presence in the store means the chat is awaiting a cutoff date;
/// its absence means the chat is awaiting a store link. There is no other
/// stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    app_id: AppId,
}

impl Conversation {
    /// Creates a conversation that has accepted the given app.
    pub fn new(app_id: AppId) -> Self {
        Self { app_id }
    }

    /// Returns the accepted app id.
    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }
}
