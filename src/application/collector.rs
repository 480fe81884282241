//! Review collection - paginated retrieval with a cutoff date.
//!
//! Drives the [`ReviewSource`] page by page and assembles the newest-first
//! result list. The source orders reviews newest-first, so the first record
//! older than the cutoff proves every remaining record is older too; the
//! collector stops there and never requests another page.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::conversation::CutoffDate;
use crate::domain::foundation::AppId;
use crate::domain::review::Review;
use crate::ports::{PageCursor, ReviewSource, SourceError};

/// Collects all reviews for an app posted on or after a cutoff date.
pub struct ReviewCollector {
    source: Arc<dyn ReviewSource>,
    max_pages: u32,
}

impl ReviewCollector {
    /// Creates a collector over the given source.
    ///
    /// `max_pages` bounds the pagination loop so a source that never yields
    /// an older record or an empty page cannot block a request forever.
    pub fn new(source: Arc<dyn ReviewSource>, max_pages: u32) -> Self {
        Self { source, max_pages }
    }

    /// Collects reviews newest-first, bounded by the cutoff date.
    ///
    /// Records without a usable post date are skipped. The first record
    /// posted strictly before the cutoff terminates collection immediately.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SourceError`] unchanged; no retries.
    pub async fn collect(
        &self,
        app_id: &AppId,
        cutoff: CutoffDate,
    ) -> Result<Vec<Review>, SourceError> {
        let mut collected: Vec<Review> = Vec::new();
        let mut cursor: Option<PageCursor> = None;

        for page_number in 1..=self.max_pages {
            let page = self.source.fetch_page(app_id, cursor.as_ref()).await?;
            debug!(%app_id, page_number, records = page.records.len(), "fetched review page");

            if page.records.is_empty() {
                return Ok(collected);
            }

            for record in page.records {
                let Some(posted_at) = record.posted_at else {
                    continue;
                };
                let posted = posted_at.date_naive();
                if posted < cutoff.date() {
                    return Ok(collected);
                }
                collected.push(Review::new(record.user, record.rating, posted, record.text));
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(collected),
            }
        }

        warn!(
            %app_id,
            max_pages = self.max_pages,
            collected = collected.len(),
            "page bound reached before cutoff; returning partial result"
        );
        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    use crate::ports::{ReviewPage, SourceReview};

    fn app_id() -> AppId {
        AppId::new("com.example.app").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn cutoff(days_ago: i64) -> CutoffDate {
        let date = today() - Duration::days(days_ago);
        CutoffDate::parse(&date.format("%Y-%m-%d").to_string(), today()).unwrap()
    }

    fn review_on(date: NaiveDate) -> SourceReview {
        SourceReview {
            user: "user".to_string(),
            rating: Some(4),
            posted_at: Some(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())),
            text: "text".to_string(),
        }
    }

    fn undated_review() -> SourceReview {
        SourceReview {
            user: "ghost".to_string(),
            rating: None,
            posted_at: None,
            text: "no date".to_string(),
        }
    }

    /// Source that replays a fixed script of pages and counts requests.
    struct ScriptedSource {
        pages: Mutex<Vec<ReviewPage>>,
        requests: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(pages: Vec<ReviewPage>) -> Self {
            let mut pages = pages;
            pages.reverse();
            Self {
                pages: Mutex::new(pages),
                requests: AtomicUsize::new(0),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReviewSource for ScriptedSource {
        async fn fetch_page(
            &self,
            _app_id: &AppId,
            _cursor: Option<&PageCursor>,
        ) -> Result<ReviewPage, SourceError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let mut pages = self.pages.lock().unwrap();
            pages.pop().ok_or_else(|| SourceError::request("script exhausted"))
        }
    }

    /// Source that fails every request.
    struct FailingSource;

    #[async_trait]
    impl ReviewSource for FailingSource {
        async fn fetch_page(
            &self,
            _app_id: &AppId,
            _cursor: Option<&PageCursor>,
        ) -> Result<ReviewPage, SourceError> {
            Err(SourceError::Status(503))
        }
    }

    #[tokio::test]
    async fn empty_first_page_yields_empty_result() {
        let source = Arc::new(ScriptedSource::new(vec![ReviewPage::default()]));
        let collector = ReviewCollector::new(source.clone(), 50);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(source.request_count(), 1);
    }

    #[tokio::test]
    async fn stops_at_first_record_older_than_cutoff_without_further_pages() {
        // Page 1: today and today-1, both within cutoff today-1.
        // Page 2: today-20, older than cutoff, with yet another page behind it.
        let source = Arc::new(ScriptedSource::new(vec![
            ReviewPage {
                records: vec![review_on(today()), review_on(today() - Duration::days(1))],
                next_cursor: Some(PageCursor::new("A")),
            },
            ReviewPage {
                records: vec![review_on(today() - Duration::days(20))],
                next_cursor: Some(PageCursor::new("B")),
            },
        ]));
        let collector = ReviewCollector::new(source.clone(), 50);

        let result = collector.collect(&app_id(), cutoff(1)).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(source.request_count(), 2, "must not fetch a third page");
    }

    #[tokio::test]
    async fn cutoff_boundary_record_is_kept() {
        let source = Arc::new(ScriptedSource::new(vec![ReviewPage {
            records: vec![review_on(today() - Duration::days(5))],
            next_cursor: None,
        }]));
        let collector = ReviewCollector::new(source, 50);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].posted, today() - Duration::days(5));
    }

    #[tokio::test]
    async fn records_without_post_date_are_skipped_not_errors() {
        let source = Arc::new(ScriptedSource::new(vec![ReviewPage {
            records: vec![undated_review(), review_on(today())],
            next_cursor: None,
        }]));
        let collector = ReviewCollector::new(source, 50);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user, "user");
    }

    #[tokio::test]
    async fn missing_cursor_ends_collection() {
        let source = Arc::new(ScriptedSource::new(vec![ReviewPage {
            records: vec![review_on(today())],
            next_cursor: None,
        }]));
        let collector = ReviewCollector::new(source.clone(), 50);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(source.request_count(), 1);
    }

    #[tokio::test]
    async fn page_bound_stops_a_never_ending_source() {
        // Every page is full of in-window reviews and promises another page.
        let pages = (0..3)
            .map(|i| ReviewPage {
                records: vec![review_on(today())],
                next_cursor: Some(PageCursor::new(format!("cursor-{i}"))),
            })
            .collect();
        let source = Arc::new(ScriptedSource::new(pages));
        let collector = ReviewCollector::new(source.clone(), 3);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(source.request_count(), 3);
    }

    #[tokio::test]
    async fn source_failure_propagates_unchanged() {
        let collector = ReviewCollector::new(Arc::new(FailingSource), 50);

        let err = collector.collect(&app_id(), cutoff(5)).await.unwrap_err();

        assert!(matches!(err, SourceError::Status(503)));
    }

    #[tokio::test]
    async fn preserves_source_order_newest_first() {
        let source = Arc::new(ScriptedSource::new(vec![ReviewPage {
            records: vec![
                review_on(today()),
                review_on(today() - Duration::days(1)),
                review_on(today() - Duration::days(2)),
            ],
            next_cursor: None,
        }]));
        let collector = ReviewCollector::new(source, 50);

        let result = collector.collect(&app_id(), cutoff(5)).await.unwrap();

        let dates: Vec<_> = result.iter().map(|r| r.posted).collect();
        assert_eq!(
            dates,
            vec![
                today(),
                today() - Duration::days(1),
                today() - Duration::days(2),
            ]
        );
    }
}
