//! Axum route handler for PDF generation.
//!
//! Sequences the whole pipeline — validate, fetch text, paginate, render,
//! read artifact — propagating the first failure. No stage is retried and no
//! partial artifact is ever returned. Concurrent requests for the same
//! keyword race on the output path; last writer wins (known limitation).

use anyhow::Context as _;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::layout::Document;
use crate::models::request::{GeneratePdfPayload, GenerationRequest};
use crate::render;
use crate::state::AppState;

/// POST /api/v1/generate-pdf
///
/// Accepts a keyword, page count, and document metadata; responds with the
/// rendered PDF bytes as an attachment named `generated_{word}.pdf`.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePdfPayload>,
) -> Result<Response, AppError> {
    let request = GenerationRequest::validate(payload)?;
    info!(
        "generating document for '{}' ({} pages, company '{}')",
        request.word, request.pages, request.company
    );

    let text = state.text_source.fetch_text(&request).await?;
    let document = Document::build(&text, &request);

    tokio::fs::create_dir_all(&state.config.output_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create output directory {}",
                state.config.output_dir.display()
            )
        })?;
    let output_path = state.config.output_dir.join(request.artifact_filename());

    // Rendering is synchronous and CPU-bound; keep it off the async workers.
    let render_document = document.clone();
    let font_dir = state.config.font_dir.clone();
    let render_path = output_path.clone();
    tokio::task::spawn_blocking(move || render::render(&render_document, &font_dir, &render_path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task panicked: {e}")))??;

    if !tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
        return Err(AppError::ArtifactMissing(
            output_path.display().to_string(),
        ));
    }

    let bytes = tokio::fs::read(&output_path)
        .await
        .with_context(|| format!("failed to read artifact {}", output_path.display()))?;

    info!(
        "rendered {} ({} bytes, {} pages)",
        output_path.display(),
        bytes.len(),
        document.pages.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", request.artifact_filename()),
        ),
    ];
    Ok((headers, bytes).into_response())
}
