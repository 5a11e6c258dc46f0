// Fixed-shape page layout: paragraph split, 3-per-page windowing, placeholder
// padding. CPU-only; the render step that consumes this output runs inside
// tokio::task::spawn_blocking.

pub mod document;
pub mod paginator;

// Re-export the public API consumed by other modules (handlers, renderer).
pub use document::{Document, Page};
pub use paginator::{paginate, split_paragraphs, PARAGRAPHS_PER_PAGE, PLACEHOLDER_PARAGRAPH};
