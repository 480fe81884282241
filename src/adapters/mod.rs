//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application core to concrete technology:
//! - `telegram` - Telegram Bot API transport and inbound update DTOs
//! - `playstore` - Google Play batchexecute review source
//! - `document` - printpdf-based document renderer
//! - `state` - in-memory conversation store
//! - `http` - axum webhook host

pub mod document;
pub mod http;
pub mod playstore;
pub mod state;
pub mod telegram;
