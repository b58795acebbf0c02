//! hOCR line extraction.
//!
//! Reads every `ocr_line` span of an hOCR document into a [`LineRecord`].
//! Lines without text or with an unreadable `bbox` are dropped individually and
//! reported in [`ParsedLines::skipped`]; they never fail the whole document.

use std::fmt;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::error::{GridError, Result};
use crate::table::{BBox, LineRecord};

const LINE_SELECTOR: &str = "span.ocr_line";

/// Why a line element did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No text left after trimming.
    EmptyText,
    /// The `title` attribute has no usable `bbox x0 y0 x1 y1` property.
    MalformedGeometry(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyText => write!(f, "empty text"),
            SkipReason::MalformedGeometry(detail) => write!(f, "{detail}"),
        }
    }
}

/// A line element that was dropped, by position among all `ocr_line` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of parsing one hOCR document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLines {
    /// Valid lines in document order.
    pub records: Vec<LineRecord>,
    pub skipped: Vec<SkippedLine>,
}

impl ParsedLines {
    /// Lines dropped for bad geometry (empty lines are not counted).
    pub fn malformed_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::MalformedGeometry(_)))
            .count()
    }
}

/// Parse the bounding box from an hOCR `title` attribute.
///
/// Only the first `;`-separated property is considered and it must read
/// `bbox x0 y0 x1 y1` with exactly four integers and a non-inverted box.
pub fn parse_bbox(title: &str) -> Result<BBox> {
    let first = title.split(';').next().unwrap_or_default();
    let (_, coords) = first
        .split_once("bbox ")
        .ok_or_else(|| GridError::malformed(title, "first property is not a bbox"))?;

    let values: Vec<i32> = coords
        .split_whitespace()
        .map(str::parse::<i32>)
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| GridError::malformed(title, format!("bad coordinate: {e}")))?;

    let [x0, y0, x1, y1] = values[..] else {
        return Err(GridError::malformed(
            title,
            format!("expected 4 coordinates, found {}", values.len()),
        ));
    };

    let bbox = BBox::new(x0, y0, x1, y1);
    if !bbox.is_well_formed() {
        return Err(GridError::malformed(title, "inverted box"));
    }
    Ok(bbox)
}

/// Text content of a line: all descendant text, trimmed at both ends.
///
/// Interior whitespace (newlines between word spans, non-breaking spaces) is
/// kept as recognized.
fn line_text(element: scraper::ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.trim().to_string()
}

/// Extract line records from hOCR markup.
pub fn parse_hocr(markup: &str) -> Result<ParsedLines> {
    let selector =
        Selector::parse(LINE_SELECTOR).map_err(|e| GridError::Selector(e.to_string()))?;
    let document = Html::parse_document(markup);

    let mut parsed = ParsedLines::default();
    for (index, element) in document.select(&selector).enumerate() {
        let text = line_text(element);
        if text.is_empty() {
            parsed.skipped.push(SkippedLine {
                index,
                reason: SkipReason::EmptyText,
            });
            continue;
        }

        let title = element.value().attr("title").unwrap_or_default();
        match parse_bbox(title) {
            Ok(bbox) => parsed.records.push(LineRecord::new(text, bbox)),
            Err(err) => {
                debug!(index, error = %err, "skipping line");
                parsed.skipped.push(SkippedLine {
                    index,
                    reason: SkipReason::MalformedGeometry(err.to_string()),
                });
            }
        }
    }

    let malformed = parsed.malformed_count();
    if malformed > 0 {
        warn!(malformed, "dropped lines with malformed geometry");
    }
    debug!(
        lines = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "parsed hOCR"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_bbox_property() {
        let bbox = parse_bbox("bbox 36 92 618 184; baseline 0 -9; x_size 30").unwrap();
        assert_eq!(bbox, BBox::new(36, 92, 618, 184));
    }

    #[test]
    fn accepts_signed_coordinates() {
        assert_eq!(parse_bbox("bbox +1 -0 2 3").unwrap(), BBox::new(1, 0, 2, 3));
    }

    #[test]
    fn rejects_bbox_that_is_not_first() {
        let err = parse_bbox("baseline 0 0; bbox 1 2 3 4").unwrap_err();
        assert!(matches!(err, GridError::MalformedGeometry { .. }));
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(parse_bbox("bbox 1 2 3").is_err());
        assert!(parse_bbox("bbox 1 2 3 4 5").is_err());
        assert!(parse_bbox("bbox 1 2 3 four").is_err());
        assert!(parse_bbox("bbox 1.5 2 3 4").is_err());
        assert!(parse_bbox("").is_err());
    }

    #[test]
    fn rejects_inverted_box() {
        let err = parse_bbox("bbox 10 0 5 10").unwrap_err();
        assert!(err.to_string().contains("inverted box"));
    }

    #[test]
    fn joins_word_spans_into_line_text() {
        let html = "<html><body>\
            <span class='ocr_line' id='line_1' title=\"bbox 10 20 200 40; baseline 0 -5\">\n  \
            <span class='ocrx_word' title='bbox 10 20 80 40'>Total</span> \
            <span class='ocrx_word' title='bbox 90 20 200 40'>amount</span>\n\
            </span></body></html>";
        let parsed = parse_hocr(html).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].text, "Total amount");
        assert_eq!(parsed.records[0].bbox, BBox::new(10, 20, 200, 40));
    }

    #[test]
    fn keeps_interior_whitespace_verbatim() {
        let html = "<span class='ocr_line' title='bbox 0 0 10 10'>  4\u{a0}500\n      kg \t</span>";
        let parsed = parse_hocr(html).unwrap();
        assert_eq!(parsed.records[0].text, "4\u{a0}500\n      kg");
    }

    #[test]
    fn whitespace_only_line_is_empty() {
        let html = "<span class='ocr_line' title='bbox 0 0 10 10'>\n \u{a0} </span>";
        let parsed = parse_hocr(html).unwrap();
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped[0].reason, SkipReason::EmptyText);
    }

    #[test]
    fn ignores_other_elements() {
        let html = r#"<div class='ocr_carea' title='bbox 0 0 10 10'>
            <p class='ocr_par' title='bbox 0 0 10 10'>para</p>
            <div class='ocr_line' title='bbox 0 0 10 10'>not a span</div>
        </div>"#;
        let parsed = parse_hocr(html).unwrap();
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
