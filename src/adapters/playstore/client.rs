//! Google Play review source.
//!
//! Implements [`ReviewSource`] against the Play Store web frontend's
//! `batchexecute` endpoint, the same RPC the store UI uses for the review
//! list. One call fetches one newest-first page plus a continuation token.
//!
//! # Wire format
//!
//! The request is a form-encoded `f.req` envelope wrapping the reviews RPC
//! (`UsvDTd`) with a doubly-encoded JSON argument string. The response is
//! JSON behind an anti-hijacking prefix (`)]}'`); the RPC result is itself
//! a JSON string nested inside the outer envelope. Review rows are
//! positional arrays: display name at `[1][0]`, star rating at `[2]`, body
//! at `[4]`, post timestamp (epoch seconds) at `[5][0]`. The continuation
//! token sits at `[1][1]` of the decoded result.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::foundation::AppId;
use crate::ports::{PageCursor, ReviewPage, ReviewSource, SourceError, SourceReview};

/// Sort order value for "newest first" in the reviews RPC.
const SORT_NEWEST: u8 = 2;

/// RPC id of the review list call.
const REVIEWS_RPC_ID: &str = "UsvDTd";

/// Configuration for the Play Store review source.
#[derive(Debug, Clone)]
pub struct PlayStoreClientConfig {
    /// Base URL (default: https://play.google.com).
    pub base_url: String,
    /// Review language (`hl` parameter).
    pub lang: String,
    /// Storefront country (`gl` parameter).
    pub country: String,
    /// Records requested per page.
    pub page_size: u32,
    /// Timeout per page request.
    pub timeout: Duration,
}

impl Default for PlayStoreClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://play.google.com".to_string(),
            lang: "en".to_string(),
            country: "in".to_string(),
            page_size: 100,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PlayStoreClientConfig {
    /// Sets the base URL (tests point this at a fake server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets language and storefront country.
    pub fn with_locale(mut self, lang: impl Into<String>, country: impl Into<String>) -> Self {
        self.lang = lang.into();
        self.country = country.into();
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Play Store `batchexecute` client.
pub struct PlayStoreClient {
    config: PlayStoreClientConfig,
    client: Client,
}

impl PlayStoreClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: PlayStoreClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the batchexecute endpoint URL with locale parameters.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/_/PlayStoreUi/data/batchexecute?hl={}&gl={}",
            self.config.base_url, self.config.lang, self.config.country
        )
    }
}

/// Builds the `f.req` envelope for one page of the reviews RPC.
fn reviews_request_body(app_id: &AppId, cursor: Option<&PageCursor>, page_size: u32) -> String {
    let token = match cursor {
        Some(cursor) => Value::String(cursor.as_str().to_string()),
        None => Value::Null,
    };
    // Inner RPC argument, serialized to a string before being wrapped.
    let argument = json!([
        null,
        null,
        [2, SORT_NEWEST, [page_size, null, token], null, []],
        [app_id.as_str(), 7]
    ])
    .to_string();

    json!([[[REVIEWS_RPC_ID, argument, null, "generic"]]]).to_string()
}

/// Decodes one batchexecute response body into a page of reviews.
fn decode_page(body: &str) -> Result<ReviewPage, SourceError> {
    // Skip the ")]}'" prefix by starting at the first JSON bracket.
    let start = body
        .find('[')
        .ok_or_else(|| SourceError::decode("no JSON payload in response"))?;
    let envelope: Value = serde_json::from_str(&body[start..])
        .map_err(|e| SourceError::decode(format!("envelope is not JSON: {e}")))?;

    // envelope[0][2] holds the RPC result as a nested JSON string.
    let inner = envelope
        .get(0)
        .and_then(|chunk| chunk.get(2))
        .and_then(Value::as_str)
        .ok_or_else(|| SourceError::decode("missing RPC result in envelope"))?;
    let result: Value = serde_json::from_str(inner)
        .map_err(|e| SourceError::decode(format!("RPC result is not JSON: {e}")))?;

    let records = match result.get(0).and_then(Value::as_array) {
        Some(rows) => rows.iter().filter_map(decode_review_row).collect(),
        // A null review list means the app has no further reviews.
        None => Vec::new(),
    };

    let next_cursor = result
        .get(1)
        .and_then(|info| info.get(1))
        .and_then(Value::as_str)
        .map(PageCursor::new);

    Ok(ReviewPage { records, next_cursor })
}

/// Maps one positional review row to a source record.
///
/// Rows that are not arrays are dropped; within a row, every field is
/// optional and defaults to empty/unknown rather than failing the page.
fn decode_review_row(row: &Value) -> Option<SourceReview> {
    row.as_array()?;

    let user = row
        .get(1)
        .and_then(|name| name.get(0))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let rating = row.get(2).and_then(Value::as_i64).map(|r| r as i32);
    let text = row
        .get(4)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let posted_at = row
        .get(5)
        .and_then(|ts| ts.get(0))
        .and_then(Value::as_i64)
        .and_then(epoch_seconds_to_utc);

    Some(SourceReview {
        user,
        rating,
        posted_at,
        text,
    })
}

fn epoch_seconds_to_utc(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

#[async_trait]
impl ReviewSource for PlayStoreClient {
    async fn fetch_page(
        &self,
        app_id: &AppId,
        cursor: Option<&PageCursor>,
    ) -> Result<ReviewPage, SourceError> {
        debug!(%app_id, has_cursor = cursor.is_some(), "requesting review page");

        let body = reviews_request_body(app_id, cursor, self.config.page_size);
        let response = self
            .client
            .post(self.endpoint_url())
            .form(&[("f.req", body)])
            .send()
            .await
            .map_err(|e| SourceError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SourceError::request(e.to_string()))?;
        decode_page(&text)
    }
}
