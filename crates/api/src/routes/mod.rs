pub mod health;
pub mod notify;
pub mod review;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notify_img                           notification intake (PUT)
/// /confirm_img                          reserved (PUT)
///
/// /reviews                              list open sessions (GET)
/// /reviews/{session_id}                 inspect (GET), close attempt (DELETE)
/// /reviews/{session_id}/submit          accept face data (POST)
/// /reviews/{session_id}/recognize-again request reprocessing (POST)
/// /reviews/{session_id}/cancel          discard (POST)
/// /reviews/{session_id}/export          save face data locally (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(notify::router())
        .nest("/reviews", review::router())
}
