//! Route definitions for the notification protocol surface.

use axum::routing::put;
use axum::Router;

use crate::handlers::notify;
use crate::state::AppState;

/// Notification intake routes, merged directly into `/api/v1`.
///
/// ```text
/// PUT    /notify_img     notify_img
/// PUT    /confirm_img    confirm_img (reserved)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notify_img", put(notify::notify_img))
        .route("/confirm_img", put(notify::confirm_img))
}
