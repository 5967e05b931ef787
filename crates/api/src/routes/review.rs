//! Route definitions for the operator review surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review session routes, nested under `/reviews`.
///
/// ```text
/// GET    /                                 list_reviews
/// GET    /{session_id}                     get_review
/// DELETE /{session_id}                     close_review
/// POST   /{session_id}/submit              submit_review
/// POST   /{session_id}/recognize-again     recognize_again
/// POST   /{session_id}/cancel              cancel_review
/// POST   /{session_id}/export              export_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(review::list_reviews))
        .route(
            "/{session_id}",
            get(review::get_review).delete(review::close_review),
        )
        .route("/{session_id}/submit", post(review::submit_review))
        .route(
            "/{session_id}/recognize-again",
            post(review::recognize_again),
        )
        .route("/{session_id}/cancel", post(review::cancel_review))
        .route("/{session_id}/export", post(review::export_review))
}
