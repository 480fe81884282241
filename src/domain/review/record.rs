//! Normalized review record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user review, normalized from the source representation.
///
/// Immutable once constructed; owned by the collection result list. The
/// post date is the calendar-date component of the source timestamp in UTC,
/// used for both the cutoff comparison and the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name. May be empty.
    pub user: String,

    /// Star rating, expected 1-5. `None` when the source omits it.
    pub rating: Option<i32>,

    /// UTC calendar date the review was posted.
    pub posted: NaiveDate,

    /// Free-form review body. May be empty and may contain line breaks.
    pub text: String,
}

impl Review {
    /// Creates a review record.
    pub fn new(
        user: impl Into<String>,
        rating: Option<i32>,
        posted: NaiveDate,
        text: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            rating,
            posted,
            text: text.into(),
        }
    }

    /// Returns the post date formatted as `YYYY-MM-DD`.
    pub fn posted_str(&self) -> String {
        self.posted.format("%Y-%m-%d").to_string()
    }

    /// Returns the rating as text, or an empty string when unknown.
    pub fn rating_str(&self) -> String {
        self.rating.map(|r| r.to_string()).unwrap_or_default()
    }
}
