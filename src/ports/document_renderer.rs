//! Document renderer port - review records to a paginated document.

use thiserror::Error;

use crate::domain::review::Review;

/// Errors that can occur during document rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The document backend failed to produce output.
    #[error("document rendering failed: {0}")]
    Generation(String),
}

impl RenderError {
    /// Creates a generation error.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}

/// Port for rendering an ordered list of reviews into a document.
///
/// # Contract
///
/// Each record renders as a numbered block
/// `"{index}. {user} | rating {rating} | {date}"` followed by the review
/// text and a separator line. Overlong lines are truncated, and a new page
/// starts before a line would overflow the current page.
pub trait DocumentRenderer: Send + Sync {
    /// Renders the reviews and returns the document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the backend cannot produce the document.
    fn render(&self, reviews: &[Review]) -> Result<Vec<u8>, RenderError>;
}
