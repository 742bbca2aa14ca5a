use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use md2notion_engine::{Block, convert_with};
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Content types accepted as Markdown, matched as case-insensitive substrings.
pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["text/markdown", "text/plain"];

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub blocks: Vec<Block>,
}

/// `POST /convert`: raw Markdown in, Notion blocks out.
///
/// Body read failures, such as exceeding the size limit, are answered here
/// so they carry the same `{"detail": ...}` shape as every other error.
pub async fn convert(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    if !accepts_content_type(&headers) {
        return Err(ApiError::UnsupportedMediaType);
    }
    let body = body?;
    if body.is_empty() {
        return Err(ApiError::EmptyInput);
    }
    let markdown = std::str::from_utf8(&body)?;

    let blocks = convert_with(markdown, &state.options)?;
    log::info!(
        "Converted {} bytes into {} blocks",
        markdown.len(),
        blocks.len()
    );
    Ok(Json(ConvertResponse { blocks }))
}

/// Any route other than `/convert`.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// `/convert` with a method other than `POST`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn accepts_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ct| ACCEPTED_CONTENT_TYPES.iter().any(|t| ct.contains(t)))
}
