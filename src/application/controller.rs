//! Conversation control - the per-chat state machine.
//!
//! Interprets one inbound text message at a time against the stored state
//! for its chat: no stored conversation means the message is read as a Play
//! Store link, a stored one means it is read as a cutoff date. Accepting a
//! date triggers collection, rendering and delivery, after which the stored
//! state is removed no matter how the attempt ended.
//!
//! Input errors (bad link, bad date) are answered with a corrective message
//! and consumed here; infrastructure errors surface as [`ControllerError`]
//! for the webhook boundary to log and acknowledge.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::ReviewCollector;
use crate::domain::conversation::{extract_app_id, Conversation, CutoffDate};
use crate::domain::foundation::{AppId, ChatId};
use crate::ports::{
    ChatTransport, ConversationStore, DocumentRenderer, RenderError, SourceError, TransportError,
};

/// Fixed user-facing message strings.
pub mod messages {
    /// Command that resets a conversation from any state.
    pub const RESET_COMMAND: &str = "/start";

    /// Prompt sent after a reset.
    pub const LINK_PROMPT: &str = "Send Google Play App link";

    /// Reply to a message without a usable `id=` parameter.
    pub const INVALID_LINK: &str = "\u{274c} Invalid Play Store link. Send again.";

    /// Prompt sent once a link is accepted.
    pub const DATE_PROMPT: &str = "Now send date (YYYY-MM-DD)\n\u{26a0}\u{fe0f} Max 10 days old";

    /// Notice sent before collection starts.
    pub const FETCHING: &str = "\u{23f3} Fetching reviews & generating PDF...";

    /// Terminal reply when the collection result is empty.
    pub const NO_REVIEWS: &str = "No reviews found.";

    /// Generic reply for infrastructure failures, sent by the webhook
    /// boundary on a best-effort basis.
    pub const FAILURE: &str = "\u{26a0}\u{fe0f} Something went wrong. Please try again later.";
}

/// Infrastructure errors escaping the controller.
///
/// Input errors never appear here; they are answered inline and consumed.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The review source failed during collection.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The document could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An outbound send failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Drives one chat's dialogue from link to delivered document.
pub struct ConversationController {
    store: Arc<dyn ConversationStore>,
    collector: ReviewCollector,
    renderer: Arc<dyn DocumentRenderer>,
    transport: Arc<dyn ChatTransport>,
}

impl ConversationController {
    /// Creates a controller over the given collaborators.
    pub fn new(
        store: Arc<dyn ConversationStore>,
        collector: ReviewCollector,
        renderer: Arc<dyn DocumentRenderer>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            store,
            collector,
            renderer,
            transport,
        }
    }

    /// Handles one inbound text message for a chat.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] only for infrastructure failures; the
    /// caller is expected to log it and still acknowledge the inbound
    /// event. Validation problems are answered to the user directly.
    pub async fn handle_message(&self, chat_id: ChatId, text: &str) -> Result<(), ControllerError> {
        let text = text.trim();

        // Reset is unconditional, whatever the prior state.
        if text == messages::RESET_COMMAND {
            self.store.remove(chat_id).await;
            self.transport.send_text(chat_id, messages::LINK_PROMPT).await?;
            return Ok(());
        }

        match self.store.get(chat_id).await {
            None => self.handle_link(chat_id, text).await,
            Some(conversation) => self.handle_date(chat_id, conversation, text).await,
        }
    }

    /// `AwaitingLink`: the message must carry an `id=` parameter.
    async fn handle_link(&self, chat_id: ChatId, text: &str) -> Result<(), ControllerError> {
        let Some(app_id) = extract_app_id(text) else {
            self.transport.send_text(chat_id, messages::INVALID_LINK).await?;
            return Ok(());
        };

        // State first, prompt second: the prompt promises the link is held.
        self.store.put(chat_id, Conversation::new(app_id)).await;
        self.transport.send_text(chat_id, messages::DATE_PROMPT).await?;
        Ok(())
    }

    /// `AwaitingDate`: the message must be an in-window `YYYY-MM-DD` date.
    async fn handle_date(
        &self,
        chat_id: ChatId,
        conversation: Conversation,
        text: &str,
    ) -> Result<(), ControllerError> {
        let cutoff = match CutoffDate::parse_utc(text) {
            Ok(cutoff) => cutoff,
            Err(err) => {
                // Still AwaitingDate; the user may retry with a fixed date.
                let reply = format!("\u{274c} {err}");
                self.transport.send_text(chat_id, &reply).await?;
                return Ok(());
            }
        };

        self.transport.send_text(chat_id, messages::FETCHING).await?;

        let outcome = self.deliver(chat_id, conversation.app_id(), cutoff).await;

        // Terminal for this conversation whether delivery succeeded,
        // found nothing, or failed.
        self.store.remove(chat_id).await;
        outcome
    }

    async fn deliver(
        &self,
        chat_id: ChatId,
        app_id: &AppId,
        cutoff: CutoffDate,
    ) -> Result<(), ControllerError> {
        let reviews = self.collector.collect(app_id, cutoff).await?;

        if reviews.is_empty() {
            self.transport.send_text(chat_id, messages::NO_REVIEWS).await?;
            return Ok(());
        }

        info!(%chat_id, %app_id, reviews = reviews.len(), "delivering review export");
        let document = self.renderer.render(&reviews)?;
        let filename = format!("reviews_{chat_id}.pdf");
        self.transport.send_document(chat_id, &filename, document).await?;
        Ok(())
    }
}
