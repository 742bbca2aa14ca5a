//! HTTP surface for Markdown to Notion conversion.
//!
//! A single route, `POST /convert`, takes raw Markdown and answers with
//! `{"blocks": [...]}`. Failures answer with `{"detail": "..."}`.

pub mod error;
pub mod handlers;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use md2notion_config::Config;
use md2notion_engine::ConvertOptions;

pub use error::ApiError;

/// Shared per-request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub options: ConvertOptions,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            options: ConvertOptions {
                tab_width: config.conversion.tab_width,
            },
        }
    }
}

/// Builds the application router from a loaded config.
pub fn app(config: &Config) -> Router {
    Router::new()
        .route("/convert", post(handlers::convert))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .with_state(AppState::from_config(config))
}
