pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Upload cap for the multipart body. Resumes are small; anything near
/// this limit is not a resume.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /
/// Static landing page with the upload form.
async fn landing_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
