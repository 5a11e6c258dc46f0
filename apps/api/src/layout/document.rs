//! The fixed-shape document handed to the renderer.

use serde::Serialize;

use crate::models::request::GenerationRequest;

/// One physical page: a 1-based page number and exactly
/// [`PARAGRAPHS_PER_PAGE`](super::PARAGRAPHS_PER_PAGE) paragraph strings,
/// real or placeholder, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: usize,
    pub paragraphs: Vec<String>,
}

/// The complete paginated document plus the metadata the renderer needs for
/// the header, footer, and first-page title. Built once per request from the
/// generated text and the validated request; consumed once by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
    pub word: String,
    pub company: String,
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl Document {
    /// Paginates `text` and pairs the pages with the request metadata.
    pub fn build(text: &str, request: &GenerationRequest) -> Self {
        Document {
            pages: super::paginate(text, request.pages),
            word: request.word.clone(),
            company: request.company.clone(),
            title: request.title.clone(),
            author: request.author.clone(),
            subject: request.subject.clone(),
        }
    }

    /// Title heading shown on the first page only.
    pub fn heading(&self) -> String {
        let mut chars = self.word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PLACEHOLDER_PARAGRAPH;
    use crate::models::request::GeneratePdfPayload;

    fn request(pages: u32) -> GenerationRequest {
        GenerationRequest::validate(GeneratePdfPayload {
            word: "India".to_string(),
            pages,
            company: "Acme".to_string(),
            title: "Report".to_string(),
            author: "A. Writer".to_string(),
            subject: "Finance".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn single_real_paragraph_is_padded_to_page_shape() {
        let document = Document::build("India has a growing economy.", &request(1));

        assert_eq!(document.pages.len(), 1);
        let page = &document.pages[0];
        assert_eq!(page.paragraphs.len(), 3);
        assert_eq!(page.paragraphs[0], "India has a growing economy.");
        assert_eq!(page.paragraphs[1], PLACEHOLDER_PARAGRAPH);
        assert_eq!(page.paragraphs[2], PLACEHOLDER_PARAGRAPH);
    }

    #[test]
    fn carries_request_metadata() {
        let document = Document::build("", &request(2));
        assert_eq!(document.word, "India");
        assert_eq!(document.company, "Acme");
        assert_eq!(document.title, "Report");
        assert_eq!(document.author, "A. Writer");
        assert_eq!(document.subject, "Finance");
    }

    #[test]
    fn heading_capitalizes_keyword() {
        let mut document = Document::build("", &request(1));
        document.word = "india".to_string();
        assert_eq!(document.heading(), "India");
    }
}
