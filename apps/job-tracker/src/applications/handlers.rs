use askama::Template;
use axum::{
    extract::{Multipart, Query, State},
    response::{Html, Redirect},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::applications::form::ApplicationForm;
use crate::applications::submit::submit_application;
use crate::applications::views::IndexPage;
use crate::board::Board;
use crate::errors::AppError;
use crate::models::application::Application;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub added: bool,
}

/// GET /
/// Renders the entry form and the board from a fresh fetch.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let board = Board::from_applications(state.store.list_all().await?);
    let page = IndexPage::new(board, query.added, state.config.max_upload_bytes);
    Ok(Html(page.render()?))
}

/// POST /applications
/// Saves the submission, then redirects back to the page (post/redirect/get)
/// so the form comes back empty with the acknowledgment shown.
pub async fn handle_create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let form = ApplicationForm::from_multipart(multipart).await?;
    let id = submit_application(&state.store, form).await?;
    info!("Application {id} submitted");
    Ok(Redirect::to("/?added=true"))
}

/// GET /api/v1/applications
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /api/v1/board
pub async fn handle_board(State(state): State<AppState>) -> Result<Json<Board>, AppError> {
    Ok(Json(Board::from_applications(state.store.list_all().await?)))
}
