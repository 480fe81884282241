//! Play Store adapters - review source implementation.

mod client;

pub use client::{PlayStoreClient, PlayStoreClientConfig};
