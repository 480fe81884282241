//! Axum webhook host for inbound Telegram updates.
//!
//! This is the top-level recovery boundary: whatever happens while handling
//! an update, the webhook is acknowledged with 200 so the platform does not
//! redeliver. Infrastructure errors are logged for operators and answered
//! to the user with a generic failure message on a best-effort basis.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::adapters::telegram::Update;
use crate::application::{messages, ConversationController};
use crate::domain::foundation::ChatId;
use crate::ports::ChatTransport;

/// Shared state for the webhook handlers.
#[derive(Clone)]
pub struct WebhookAppState {
    /// The conversation state machine.
    pub controller: Arc<ConversationController>,
    /// Transport used to notify the user when handling fails.
    pub transport: Arc<dyn ChatTransport>,
}

impl WebhookAppState {
    /// Creates the webhook state.
    pub fn new(controller: Arc<ConversationController>, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            controller,
            transport,
        }
    }
}

/// Builds the full router:
///
/// - `POST /webhook` - inbound Telegram update, always answered 200
/// - `GET /` - liveness probe
pub fn webhook_router(state: WebhookAppState) -> Router {
    Router::new()
        .route("/webhook", post(receive_update))
        .route("/", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /webhook - handle one Telegram update.
///
/// The body is decoded manually so that even an undecodable payload is
/// still acknowledged rather than bounced back for redelivery.
async fn receive_update(
    State(state): State<WebhookAppState>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(err) => {
            warn!(error = %err, "discarding undecodable update payload");
            return ack();
        }
    };

    // Updates without a message envelope are a no-op.
    let Some(message) = update.message else {
        return ack();
    };

    let chat_id = ChatId::new(message.chat.id);
    let text = message.text.unwrap_or_default();

    if let Err(err) = state.controller.handle_message(chat_id, &text).await {
        error!(%chat_id, error = %err, "update handling failed");
        if let Err(notify_err) = state.transport.send_text(chat_id, messages::FAILURE).await {
            warn!(%chat_id, error = %notify_err, "could not notify user of the failure");
        }
    }

    ack()
}

/// GET / - liveness probe.
async fn health() -> &'static str {
    "Bot running"
}

fn ack() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
