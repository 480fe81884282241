//! Cutoff date validation policy.
//!
//! Reviews can only be exported for the recent past: the accepted window is
//! `[today - 10 days, today]` inclusive, where "today" is the current UTC
//! calendar date.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

/// How far back a cutoff date may reach, in days.
pub const WINDOW_DAYS: i64 = 10;

/// Errors produced by cutoff date validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The text did not parse as a `YYYY-MM-DD` date.
    #[error("invalid date format, expected YYYY-MM-DD")]
    Format,

    /// The date lies after today.
    #[error("future dates are not allowed")]
    Future,

    /// The date lies before the allowed window.
    #[error("only dates from {min} to {max} are allowed")]
    TooOld { min: NaiveDate, max: NaiveDate },
}

/// An accepted cutoff date.
///
/// Can only be constructed through [`CutoffDate::parse`], so holding one
/// proves the window policy was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CutoffDate(NaiveDate);

impl CutoffDate {
    /// Parses and validates `text` against the window ending at `today`.
    ///
    /// # Errors
    ///
    /// - [`DateError::Format`] when `text` is not a `YYYY-MM-DD` date
    /// - [`DateError::Future`] when the date is strictly after `today`
    /// - [`DateError::TooOld`] when the date is before `today - 10 days`
    pub fn parse(text: &str, today: NaiveDate) -> Result<Self, DateError> {
        let date =
            NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| DateError::Format)?;

        let min = today - chrono::Duration::days(WINDOW_DAYS);
        if date > today {
            return Err(DateError::Future);
        }
        if date < min {
            return Err(DateError::TooOld { min, max: today });
        }
        Ok(Self(date))
    }

    /// Parses and validates `text` against the current UTC calendar date.
    pub fn parse_utc(text: &str) -> Result<Self, DateError> {
        Self::parse(text, Utc::now().date_naive())
    }

    /// Returns the validated date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}
