//! Review Courier - binary entry point.
//!
//! Loads configuration, wires the adapters to the conversation controller,
//! and serves the Telegram webhook.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use tracing::info;
use tracing_subscriber::EnvFilter;

use review_courier::adapters::document::PdfRenderer;
use review_courier::adapters::http::{webhook_router, WebhookAppState};
use review_courier::adapters::playstore::{PlayStoreClient, PlayStoreClientConfig};
use review_courier::adapters::state::InMemoryConversationStore;
use review_courier::adapters::telegram::{TelegramClient, TelegramClientConfig};
use review_courier::application::{ConversationController, ReviewCollector};
use review_courier::config::AppConfig;
use review_courier::ports::ChatTransport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramClient::new(
        TelegramClientConfig::new(config.telegram.bot_token.expose_secret().clone())
            .with_base_url(config.telegram.api_base_url.clone())
            .with_text_timeout(Duration::from_secs(config.telegram.text_timeout_secs))
            .with_document_timeout(Duration::from_secs(config.telegram.document_timeout_secs)),
    ));

    let source = Arc::new(PlayStoreClient::new(
        PlayStoreClientConfig::default()
            .with_locale(config.source.lang.clone(), config.source.country.clone())
            .with_page_size(config.source.page_size),
    ));

    let controller = Arc::new(ConversationController::new(
        Arc::new(InMemoryConversationStore::new()),
        ReviewCollector::new(source, config.source.max_pages),
        Arc::new(PdfRenderer::new()),
        transport.clone(),
    ));

    let app = webhook_router(WebhookAppState::new(controller, transport));

    let addr = config.server.socket_addr();
    info!(%addr, "review-courier listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
