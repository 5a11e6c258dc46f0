//! Paginator — buckets generated prose into fixed-shape pages.
//!
//! The provider is asked for exactly `PARAGRAPHS_PER_PAGE * pages` paragraphs
//! separated by blank lines, but nothing guarantees it complies. This module
//! normalizes whatever came back into exactly `pages` pages of exactly
//! `PARAGRAPHS_PER_PAGE` paragraphs each:
//!
//! - each page takes the fixed slice `[3p, 3p+3)` of the paragraph sequence,
//!   computed from the page index, never from "paragraphs remaining";
//! - short slices are right-padded with [`PLACEHOLDER_PARAGRAPH`];
//! - surplus paragraphs beyond `3 * pages` are dropped.
//!
//! The result is deterministic: same text and page count, same output.

use tracing::warn;

use super::document::Page;

/// Fixed count of paragraphs laid out on each page.
pub const PARAGRAPHS_PER_PAGE: usize = 3;

/// Fallback paragraph inserted when real content is insufficient.
pub const PLACEHOLDER_PARAGRAPH: &str =
    "Placeholder paragraph: Content generation incomplete. Please try again.";

/// Splits raw generated text on blank lines into trimmed paragraphs.
///
/// Segments that are empty after trimming are discarded; everything else is
/// kept in source order, unfiltered and unreordered.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lays `text` out into exactly `page_count` pages of exactly
/// [`PARAGRAPHS_PER_PAGE`] paragraphs each.
pub fn paginate(text: &str, page_count: u32) -> Vec<Page> {
    let paragraphs = split_paragraphs(text);
    let expected = PARAGRAPHS_PER_PAGE * page_count as usize;

    if paragraphs.len() > expected {
        warn!(
            "text source returned {} paragraphs, dropping {} beyond the requested {}",
            paragraphs.len(),
            paragraphs.len() - expected,
            expected
        );
    } else if paragraphs.len() < expected {
        warn!(
            "text source returned {} of {} requested paragraphs, padding with placeholders",
            paragraphs.len(),
            expected
        );
    }

    (0..page_count as usize)
        .map(|page_index| {
            let start = page_index * PARAGRAPHS_PER_PAGE;
            let end = (start + PARAGRAPHS_PER_PAGE).min(paragraphs.len());
            let mut entries: Vec<String> = if start < paragraphs.len() {
                paragraphs[start..end].to_vec()
            } else {
                Vec::new()
            };
            while entries.len() < PARAGRAPHS_PER_PAGE {
                entries.push(PLACEHOLDER_PARAGRAPH.to_string());
            }
            Page {
                number: page_index + 1,
                paragraphs: entries,
            }
        })
        .collect()
}
