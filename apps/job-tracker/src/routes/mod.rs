pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::applications::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let resumes = ServeDir::new(state.store.resume_dir());
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(handlers::handle_index))
        .route(
            "/applications",
            post(handlers::handle_create).layer(upload_limit),
        )
        .nest_service("/resumes", resumes)
        // JSON read API
        .route("/api/v1/applications", get(handlers::handle_list))
        .route("/api/v1/board", get(handlers::handle_board))
        .with_state(state)
}
