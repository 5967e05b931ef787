//! Handlers for the operator review surface.
//!
//! These endpoints are the headless stand-in for the notification window:
//! list what awaits review, inspect one session, and end it with exactly one
//! of submit / recognize-again / cancel. A close without a decision is
//! always rejected.

use std::path::PathBuf;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use controlpanel_core::face::FaceData;
use controlpanel_core::session::TerminalAction;
use controlpanel_core::store;
use controlpanel_core::types::SessionId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for submit and recognize-again. `faces_data` is the operator's
/// edited face list; omit it to keep the data as received.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub faces_data: Option<Vec<FaceData>>,
}

/// Body for the local face-data export.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub path: String,
}

/// GET /api/v1/reviews
///
/// Open sessions in arrival (FIFO) order.
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sessions = state.reviews.list().await;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /api/v1/reviews/{session_id}
///
/// Full view of one session: image buffer and current face list.
pub async fn get_review(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let view = state.reviews.get(session_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/reviews/{session_id}/submit
///
/// Accept the face data, with any edits from the request body written back.
pub async fn submit_review(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    let reply = state
        .reviews
        .resolve(session_id, TerminalAction::Submit(input.faces_data))
        .await?;

    tracing::info!(session_id = %session_id, id = %reply.id, "Review submitted");

    Ok(Json(DataResponse { data: reply }))
}

/// POST /api/v1/reviews/{session_id}/recognize-again
///
/// Send the (possibly edited) face data back for reprocessing.
pub async fn recognize_again(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    let reply = state
        .reviews
        .resolve(session_id, TerminalAction::RecognizeAgain(input.faces_data))
        .await?;

    tracing::info!(session_id = %session_id, id = %reply.id, "Review sent for reprocessing");

    Ok(Json(DataResponse { data: reply }))
}

/// POST /api/v1/reviews/{session_id}/cancel
///
/// Discard the image; its face data is not saved.
pub async fn cancel_review(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let reply = state
        .reviews
        .resolve(session_id, TerminalAction::Cancel)
        .await?;

    tracing::info!(session_id = %session_id, id = %reply.id, "Review cancelled");

    Ok(Json(DataResponse { data: reply }))
}

/// DELETE /api/v1/reviews/{session_id}
///
/// Attempt to close the session without a decision. Rejected with 409 while
/// the session is open; 404 once it has been resolved and discarded.
pub async fn close_review(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    state.reviews.close(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/reviews/{session_id}/export
///
/// Save the session's current face list as JSON to a local file. Image
/// bytes are not written.
pub async fn export_review(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(input): Json<ExportRequest>,
) -> AppResult<impl IntoResponse> {
    let faces = state.reviews.faces(session_id).await?;

    let path = PathBuf::from(&input.path);
    store::save_faces(&path, &faces)?;

    tracing::info!(session_id = %session_id, path = %input.path, "Face data exported");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: serde_json::json!({ "path": input.path }),
        }),
    ))
}
