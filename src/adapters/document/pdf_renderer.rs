//! PDF rendering via `printpdf`.
//!
//! Produces an A4 document where each review is a numbered block: a header
//! line, the review text line by line, then a dashed separator. Lines are
//! truncated at a fixed width (never wrapped) and a fresh page starts
//! before a line would cross the bottom margin.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::domain::review::Review;
use crate::ports::{DocumentRenderer, RenderError};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LEFT_MARGIN: Mm = Mm(14.0);
const TOP_Y: Mm = Mm(283.0);
const BOTTOM_Y: Mm = Mm(14.0);
const LINE_HEIGHT: Mm = Mm(4.9);
const FONT_SIZE: f32 = 10.0;

/// Maximum characters per rendered line; the rest is cut off.
const MAX_LINE_CHARS: usize = 110;

/// Width of the separator between review blocks.
const SEPARATOR_CHARS: usize = 90;

/// Renders review lists as paginated A4 PDFs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }
}

/// Builds the text lines for one review block.
///
/// `index` is 1-based, matching the numbered output.
fn block_lines(index: usize, review: &Review) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    lines.push(format!(
        "{index}. {} | rating {} | {}",
        review.user,
        review.rating_str(),
        review.posted_str()
    ));
    lines.extend(review.text.split('\n').map(str::to_string));
    lines.push("-".repeat(SEPARATOR_CHARS));
    lines
}

/// Cuts a line at the fixed width, counting characters rather than bytes.
fn truncate_line(line: &str, max_chars: usize) -> String {
    line.chars().take(max_chars).collect()
}

/// Writer that tracks the vertical cursor and opens new pages on overflow.
struct PageWriter<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    font: &'a IndirectFontRef,
    layer: PdfLayerReference,
    y: Mm,
}

impl<'a> PageWriter<'a> {
    fn new(
        doc: &'a printpdf::PdfDocumentReference,
        font: &'a IndirectFontRef,
        layer: PdfLayerReference,
    ) -> Self {
        Self {
            doc,
            font,
            layer,
            y: TOP_Y,
        }
    }

    fn write_line(&mut self, line: &str) {
        if self.y.0 < BOTTOM_Y.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
        self.layer.use_text(
            truncate_line(line, MAX_LINE_CHARS),
            FONT_SIZE,
            LEFT_MARGIN,
            self.y,
            self.font,
        );
        self.y -= LINE_HEIGHT;
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, reviews: &[Review]) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new("Reviews", PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::generation(e.to_string()))?;

        let mut writer = PageWriter::new(&doc, &font, doc.get_page(page).get_layer(layer));
        for (i, review) in reviews.iter().enumerate() {
            for line in block_lines(i + 1, review) {
                writer.write_line(&line);
            }
        }

        let mut buffer = BufWriter::new(Vec::new());
        doc.save(&mut buffer)
            .map_err(|e| RenderError::generation(e.to_string()))?;
        buffer
            .into_inner()
            .map_err(|e| RenderError::generation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn review(user: &str, rating: Option<i32>, text: &str) -> Review {
        Review::new(
            user,
            rating,
            NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            text,
        )
    }

    #[test]
    fn header_line_follows_the_block_format() {
        let lines = block_lines(3, &review("Alice", Some(5), "Nice"));
        assert_eq!(lines[0], "3. Alice | rating 5 | 2026-08-20");
    }

    #[test]
    fn missing_rating_renders_empty_in_header() {
        let lines = block_lines(1, &review("Bob", None, ""));
        assert_eq!(lines[0], "1. Bob | rating  | 2026-08-20");
    }

    #[test]
    fn embedded_line_breaks_become_separate_lines() {
        let lines = block_lines(1, &review("Carol", Some(4), "line one\nline two"));
        assert_eq!(lines[1], "line one");
        assert_eq!(lines[2], "line two");
    }

    #[test]
    fn block_ends_with_a_ninety_char_separator() {
        let lines = block_lines(1, &review("Dave", Some(2), "x"));
        let separator = lines.last().unwrap();
        assert_eq!(separator.len(), 90);
        assert!(separator.chars().all(|c| c == '-'));
    }

    #[test]
    fn long_lines_are_truncated_not_wrapped() {
        let long = "y".repeat(500);
        assert_eq!(truncate_line(&long, MAX_LINE_CHARS).chars().count(), 110);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let line = "\u{2605}".repeat(120);
        let cut = truncate_line(&line, MAX_LINE_CHARS);
        assert_eq!(cut.chars().count(), 110);
    }

    #[test]
    fn render_produces_a_pdf() {
        let reviews = vec![review("Alice", Some(5), "Great app\nreally")];
        let bytes = PdfRenderer::new().render(&reviews).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_survives_enough_reviews_to_span_pages() {
        let reviews: Vec<Review> = (0..200)
            .map(|i| review(&format!("user{i}"), Some(3), "body"))
            .collect();
        let bytes = PdfRenderer::new().render(&reviews).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_of_empty_list_is_still_a_valid_document() {
        let bytes = PdfRenderer::new().render(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
