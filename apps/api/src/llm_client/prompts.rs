// Prompt construction for the document text source.
// The paragraph count and separator instructions must line up with the
// paginator's expectations: `PARAGRAPHS_PER_PAGE * pages` paragraphs
// separated by exactly one blank line. The paginator tolerates any deviation,
// but the prompt asks for exactly that shape.

use crate::layout::PARAGRAPHS_PER_PAGE;
use crate::models::request::GenerationRequest;

/// System prompt establishing the assistant's role for document generation.
pub const DOCUMENT_SYSTEM: &str = "You are a professional assistant creating \
    corporate document content. Produce polished, well-structured prose \
    suitable for a formal PDF document.";

/// Builds the user prompt embedding the keyword, metadata, and the exact
/// paragraph count and shape the layout expects.
pub fn document_prompt(request: &GenerationRequest) -> String {
    let paragraph_count = PARAGRAPHS_PER_PAGE * request.pages as usize;
    format!(
        "Generate a professional document for {company}. The document should be about \
         '{word}' and align with the subject '{subject}'. Create content for {pages} \
         page(s), with exactly {per_page} paragraphs per page. Each paragraph must be \
         200-300 words and focus on distinct aspects of '{word}'. Ensure the tone is \
         professional, engaging, and suitable for a corporate PDF titled '{title}' \
         authored by '{author}'. Separate each paragraph with exactly two newlines \
         ('\\n\\n') and ensure exactly {total} paragraphs are generated, with no \
         additional text or headings outside the paragraphs.",
        company = request.company,
        word = request.word,
        subject = request.subject,
        pages = request.pages,
        per_page = PARAGRAPHS_PER_PAGE,
        total = paragraph_count,
        title = request.title,
        author = request.author,
    )
}
