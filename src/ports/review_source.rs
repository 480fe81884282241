//! Review source port - paginated review retrieval.
//!
//! The source returns reviews newest-first in fixed-size pages, each page
//! carrying an opaque continuation cursor. The collector exploits the
//! ordering guarantee: once one record predates the cutoff, every later
//! record does too.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::foundation::AppId;

/// Opaque continuation token for the next page.
///
/// The value has meaning only to the source that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wraps a raw continuation token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One review as delivered by the source, before normalization.
#[derive(Debug, Clone)]
pub struct SourceReview {
    /// Reviewer display name. May be empty.
    pub user: String,

    /// Star rating, if the source supplied one.
    pub rating: Option<i32>,

    /// Post timestamp. `None` when the source omitted or mangled it;
    /// such records are skipped by the collector.
    pub posted_at: Option<DateTime<Utc>>,

    /// Review body.
    pub text: String,
}

/// One page of source records plus the cursor for the next page.
#[derive(Debug, Clone, Default)]
pub struct ReviewPage {
    /// Records in source order (newest first).
    pub records: Vec<SourceReview>,

    /// Cursor for the following page; `None` means no more pages.
    pub next_cursor: Option<PageCursor>,
}

/// Errors from the review source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The page request could not be completed.
    #[error("review source request failed: {0}")]
    Request(String),

    /// The source answered with an unexpected HTTP status.
    #[error("review source returned status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("malformed review source response: {0}")]
    Decode(String),
}

impl SourceError {
    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Port for the paginated review source.
///
/// # Contract
///
/// Implementations must return reviews sorted newest-first and must hand
/// back a `next_cursor` exactly when more pages exist. A request with
/// `cursor: None` fetches the first page.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetches one page of reviews for the given app.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, unexpected status, or
    /// an undecodable response. Errors are not retried at this level.
    async fn fetch_page(
        &self,
        app_id: &AppId,
        cursor: Option<&PageCursor>,
    ) -> Result<ReviewPage, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_source_is_object_safe() {
        fn _accepts_dyn(_source: &dyn ReviewSource) {}
    }

    #[test]
    fn page_cursor_preserves_raw_token() {
        let cursor = PageCursor::new("CpEBCo4B");
        assert_eq!(cursor.as_str(), "CpEBCo4B");
    }

    #[test]
    fn source_error_messages_name_the_cause() {
        assert!(SourceError::Status(503).to_string().contains("503"));
        assert!(SourceError::decode("truncated envelope")
            .to_string()
            .contains("truncated envelope"));
    }
}
