//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReviewSource` - paginated review retrieval for one app
//! - `ChatTransport` - outbound text and document delivery to a chat
//! - `DocumentRenderer` - turning review records into a paginated document
//! - `ConversationStore` - per-chat conversation state storage

mod chat_transport;
mod conversation_store;
mod document_renderer;
mod review_source;

pub use chat_transport::{ChatTransport, TransportError};
pub use conversation_store::ConversationStore;
pub use document_renderer::{DocumentRenderer, RenderError};
pub use review_source::{PageCursor, ReviewPage, ReviewSource, SourceError, SourceReview};
