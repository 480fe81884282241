//! HTTP adapters - webhook host.

mod webhook;

pub use webhook::{webhook_router, WebhookAppState};
