//! Foundation - shared identifiers and validation errors.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{AppId, ChatId};
