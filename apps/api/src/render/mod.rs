//! PDF renderer — draws a fixed-shape [`Document`] into a PDF file.
//!
//! Synchronous and CPU-bound; the handler runs it inside
//! `tokio::task::spawn_blocking`. Every page carries a running header
//! (`"{company} - {title}"`) and footer (`"Page {n} | Author: {author}"`)
//! drawn through a page decorator; the first page opens with a title heading
//! derived from the keyword.
//!
//! A document with zero pages or a page without exactly
//! [`PARAGRAPHS_PER_PAGE`] paragraphs violates the paginator contract and is
//! rejected up front instead of being silently skipped.

use std::path::Path;

use genpdf::elements::{Break, PageBreak, Paragraph};
use genpdf::error::{Error as PdfError, ErrorKind};
use genpdf::style::Style;
use genpdf::{Element, Margins, Mm, PageDecorator, PaperSize, Position};
use thiserror::Error;
use tracing::debug;

use crate::layout::{Document, PARAGRAPHS_PER_PAGE};

pub mod fonts;

const TITLE_FONT_SIZE: u8 = 16;
const BODY_FONT_SIZE: u8 = 11;
const HEADER_FONT_SIZE: u8 = 9;
const FOOTER_FONT_SIZE: u8 = 7;

/// 0.5 inch page margins, matching the document template.
const PAGE_MARGIN_MM: f64 = 12.7;
/// Vertical space reserved at the bottom of each page for the footer line.
const FOOTER_HEIGHT_MM: f64 = 8.0;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The paginator handed over a malformed document. This is a
    /// programming-error class, never expected in correct operation.
    #[error("layout contract violation: {0}")]
    Contract(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),
}

/// Renders `document` into a PDF at `output_path`, loading fonts from
/// `font_dir`.
pub fn render(document: &Document, font_dir: &Path, output_path: &Path) -> Result<(), RenderError> {
    check_contract(document)?;

    debug!(
        "rendering '{}' ({} pages, subject '{}') to {}",
        document.title,
        document.pages.len(),
        document.subject,
        output_path.display()
    );

    let font_family = fonts::font_family(font_dir)?;
    let mut pdf = genpdf::Document::new(font_family);
    pdf.set_title(&document.title);
    pdf.set_paper_size(PaperSize::A4);
    pdf.set_page_decorator(HeaderFooterDecorator::new(
        format!("{} - {}", document.company, document.title),
        document.author.clone(),
    ));

    let title_style = Style::new().bold().with_font_size(TITLE_FONT_SIZE);
    let body_style = Style::new().with_font_size(BODY_FONT_SIZE);

    // Title heading on the first page only.
    pdf.push(Paragraph::new(document.heading()).styled(title_style));
    pdf.push(Break::new(1.0));

    for (index, page) in document.pages.iter().enumerate() {
        for paragraph in &page.paragraphs {
            pdf.push(Paragraph::new(paragraph.clone()).styled(body_style));
            pdf.push(Break::new(0.8));
        }
        if index + 1 < document.pages.len() {
            pdf.push(PageBreak::new());
        }
    }

    pdf.render_to_file(output_path)?;
    Ok(())
}

fn check_contract(document: &Document) -> Result<(), RenderError> {
    if document.pages.is_empty() {
        return Err(RenderError::Contract(
            "document has zero pages".to_string(),
        ));
    }
    for page in &document.pages {
        if page.paragraphs.len() != PARAGRAPHS_PER_PAGE {
            return Err(RenderError::Contract(format!(
                "page {} has {} paragraphs, expected {}",
                page.number,
                page.paragraphs.len(),
                PARAGRAPHS_PER_PAGE
            )));
        }
    }
    Ok(())
}

/// Page decorator drawing the running header and footer on every page.
struct HeaderFooterDecorator {
    page: usize,
    header: String,
    author: String,
}

impl HeaderFooterDecorator {
    fn new(header: String, author: String) -> Self {
        Self {
            page: 0,
            header,
            author,
        }
    }
}

impl PageDecorator for HeaderFooterDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: Style,
    ) -> Result<genpdf::render::Area<'a>, PdfError> {
        self.page += 1;

        area.add_margins(Margins::trbl(
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
        ));

        let mut header = Paragraph::new(self.header.clone())
            .styled(Style::new().bold().with_font_size(HEADER_FONT_SIZE));
        let result = header.render(context, area.clone(), style)?;
        area.add_offset(Position::new(0, result.size.height));

        let footer_height = Mm::from(FOOTER_HEIGHT_MM);
        let available = area.size().height;
        if footer_height > available {
            return Err(PdfError::new(
                "Footer height exceeds available space",
                ErrorKind::InvalidData,
            ));
        }

        let mut footer_area = area.clone();
        footer_area.add_offset(Position::new(0, available - footer_height));
        let mut footer = Paragraph::new(format!("Page {} | Author: {}", self.page, self.author))
            .styled(Style::new().with_font_size(FOOTER_FONT_SIZE));
        let result = footer.render(context, footer_area, style)?;
        if result.has_more {
            return Err(PdfError::new(
                "Footer does not fit into the reserved space",
                ErrorKind::PageSizeExceeded,
            ));
        }

        area.set_height(available - footer_height);
        Ok(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Document, Page, PLACEHOLDER_PARAGRAPH};
    use std::path::PathBuf;

    fn test_font_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
    }

    fn document_with_pages(pages: Vec<Page>) -> Document {
        Document {
            pages,
            word: "India".to_string(),
            company: "Acme".to_string(),
            title: "Report".to_string(),
            author: "A. Writer".to_string(),
            subject: "Finance".to_string(),
        }
    }

    fn full_page(number: usize) -> Page {
        Page {
            number,
            paragraphs: vec![PLACEHOLDER_PARAGRAPH.to_string(); 3],
        }
    }

    #[test]
    fn rejects_document_with_zero_pages() {
        let document = document_with_pages(vec![]);
        let err = render(&document, &test_font_dir(), Path::new("/dev/null")).unwrap_err();
        assert!(matches!(err, RenderError::Contract(_)));
    }

    #[test]
    fn rejects_page_with_wrong_paragraph_count() {
        let document = document_with_pages(vec![
            full_page(1),
            Page {
                number: 2,
                paragraphs: vec!["only one".to_string()],
            },
        ]);
        let err = render(&document, &test_font_dir(), Path::new("/dev/null")).unwrap_err();
        match err {
            RenderError::Contract(msg) => {
                assert!(msg.contains("page 2"), "message was: {msg}");
            }
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn renders_multi_page_pdf() {
        let font_dir = test_font_dir();
        if !fonts::fonts_available(&font_dir) {
            eprintln!("skipping: fonts not available in {}", font_dir.display());
            return;
        }

        let scratch = tempfile::tempdir().unwrap();
        let output = scratch.path().join("generated_India.pdf");
        let document = document_with_pages(vec![full_page(1), full_page(2)]);

        render(&document, &font_dir, &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
