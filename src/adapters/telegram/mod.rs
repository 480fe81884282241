//! Telegram adapters - Bot API transport and inbound update types.

mod client;
mod update;

pub use client::{TelegramClient, TelegramClientConfig};
pub use update::{Chat, IncomingMessage, Update};
