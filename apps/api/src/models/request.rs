//! Request payload and its validated form.
//!
//! `GeneratePdfPayload` is the raw JSON body; `GenerationRequest` is the
//! validated, trimmed, immutable value the rest of the pipeline consumes.
//! Validation is a pure function of the input and runs before any provider
//! call is made.

use serde::Deserialize;

use crate::errors::AppError;

/// Lower bound on the requested page count (inclusive).
pub const MIN_PAGES: u32 = 1;
/// Upper bound on the requested page count (inclusive).
pub const MAX_PAGES: u32 = 5;

/// Raw JSON body of `POST /api/v1/generate-pdf`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePdfPayload {
    pub word: String,
    pub pages: u32,
    pub company: String,
    pub title: String,
    pub author: String,
    pub subject: String,
}

/// A validated generation request. Construction via [`GenerationRequest::validate`]
/// is the only way to obtain one; all fields are trimmed and non-empty, the
/// keyword is a single token, and `pages` is within `[MIN_PAGES, MAX_PAGES]`.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub word: String,
    pub pages: u32,
    pub company: String,
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl GenerationRequest {
    /// Validates the raw payload, returning a field-specific
    /// `AppError::Validation` on the first rule that fails.
    pub fn validate(payload: GeneratePdfPayload) -> Result<Self, AppError> {
        let word = payload.word.trim();
        if word.is_empty() {
            return Err(AppError::Validation(
                "'word' cannot be empty".to_string(),
            ));
        }
        if word.split_whitespace().count() > 1 {
            return Err(AppError::Validation(
                "'word' must be a single word".to_string(),
            ));
        }

        if payload.pages < MIN_PAGES || payload.pages > MAX_PAGES {
            return Err(AppError::Validation(format!(
                "'pages' must be between {MIN_PAGES} and {MAX_PAGES}"
            )));
        }

        let company = non_empty("company", &payload.company)?;
        let title = non_empty("title", &payload.title)?;
        let author = non_empty("author", &payload.author)?;
        let subject = non_empty("subject", &payload.subject)?;

        Ok(GenerationRequest {
            word: word.to_string(),
            pages: payload.pages,
            company,
            title,
            author,
            subject,
        })
    }

    /// Filename under which the artifact is served and stored.
    pub fn artifact_filename(&self) -> String {
        format!("generated_{}.pdf", self.word)
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("'{field}' cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> GeneratePdfPayload {
        GeneratePdfPayload {
            word: "India".to_string(),
            pages: 1,
            company: "Acme".to_string(),
            title: "Report".to_string(),
            author: "A. Writer".to_string(),
            subject: "Finance".to_string(),
        }
    }

    fn expect_validation_error(result: Result<GenerationRequest, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        let request = GenerationRequest::validate(payload()).unwrap();
        assert_eq!(request.word, "India");
        assert_eq!(request.pages, 1);
        assert_eq!(request.artifact_filename(), "generated_India.pdf");
    }

    #[test]
    fn trims_all_string_fields() {
        let mut p = payload();
        p.word = "  India ".to_string();
        p.company = " Acme  ".to_string();
        let request = GenerationRequest::validate(p).unwrap();
        assert_eq!(request.word, "India");
        assert_eq!(request.company, "Acme");
    }

    #[test]
    fn rejects_multi_word_keyword() {
        let mut p = payload();
        p.word = "India Country".to_string();
        let msg = expect_validation_error(GenerationRequest::validate(p));
        assert!(msg.contains("single word"), "message was: {msg}");
    }

    #[test]
    fn rejects_empty_keyword() {
        let mut p = payload();
        p.word = "   ".to_string();
        let msg = expect_validation_error(GenerationRequest::validate(p));
        assert!(msg.contains("word"));
    }

    #[test]
    fn rejects_page_counts_outside_bounds() {
        for pages in [0, 6, 100] {
            let mut p = payload();
            p.pages = pages;
            let msg = expect_validation_error(GenerationRequest::validate(p));
            assert!(msg.contains("between 1 and 5"), "message was: {msg}");
        }
    }

    #[test]
    fn accepts_page_count_bounds() {
        for pages in [MIN_PAGES, MAX_PAGES] {
            let mut p = payload();
            p.pages = pages;
            assert!(GenerationRequest::validate(p).is_ok());
        }
    }

    #[test]
    fn rejects_blank_metadata_fields() {
        for field in ["company", "title", "author", "subject"] {
            let mut p = payload();
            match field {
                "company" => p.company = " ".to_string(),
                "title" => p.title = String::new(),
                "author" => p.author = "\t".to_string(),
                "subject" => p.subject = "  ".to_string(),
                _ => unreachable!(),
            }
            let msg = expect_validation_error(GenerationRequest::validate(p));
            assert!(msg.contains(field), "message was: {msg}");
        }
    }
}
