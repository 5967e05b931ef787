//! Handlers for the notification listener surface.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use controlpanel_core::reply::MessageHeaders;

use crate::protocol::{AckEnvelope, ErrorEnvelope, NotifyImgRequest};
use crate::state::AppState;

/// PUT /api/v1/notify_img
///
/// Accepts one analyzed image for operator review. Validation failures are
/// answered with the protocol error envelope, echoing whatever correlation
/// id could be parsed. On success the notification is handed to the review
/// registry and the response depends on the effective mode:
///
/// - *deferred*: the handler suspends until the operator decides; the reply
///   message is the response body.
/// - *immediate*: an acknowledgement is returned at once and a background
///   task forwards the eventual decision to the caller's `put_control`
///   endpoint.
pub async fn notify_img(
    State(state): State<AppState>,
    payload: Result<Json<NotifyImgRequest>, JsonRejection>,
) -> Response {
    let src_addr = state.config.src_addr.clone();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected unreadable notify_img body");
            return protocol_error(
                &src_addr,
                "",
                StatusCode::BAD_REQUEST,
                format!("unable to read request body: {rejection}"),
            );
        }
    };

    let notification = match request.into_notification() {
        Ok(notification) => notification,
        Err(missing) => {
            tracing::warn!(
                id = %missing.id_echo,
                error = %missing.error_info,
                "Rejected incomplete notify_img body"
            );
            return protocol_error(
                &src_addr,
                &missing.id_echo,
                StatusCode::BAD_REQUEST,
                missing.error_info,
            );
        }
    };

    let immediate = notification
        .immed
        .unwrap_or(state.config.immediate_response);
    let id = notification.id.clone();
    let callback_addr = notification.src_addr.clone();

    let (summary, slot) = state.reviews.open(notification).await;
    tracing::info!(
        session_id = %summary.session_id,
        id = %id,
        immediate,
        "Notification dispatched for review"
    );

    if immediate {
        // Acknowledge now; forward the decision once the slot fills. A
        // delivery failure is logged inside `deliver` and dropped.
        let delivery = Arc::clone(&state.delivery);
        let forward_id = id.clone();
        tokio::spawn(async move {
            match slot.await {
                Ok(reply) => {
                    let _ = delivery.deliver(&callback_addr, &reply).await;
                }
                Err(_) => {
                    tracing::warn!(
                        id = %forward_id,
                        "Review session ended without a decision; nothing forwarded"
                    );
                }
            }
        });

        Json(AckEnvelope {
            headers: MessageHeaders { src_addr },
            id,
        })
        .into_response()
    } else {
        // Deferred: park until the operator's terminal action fills the slot.
        match slot.await {
            Ok(reply) => Json(reply).into_response(),
            Err(_) => protocol_error(
                &src_addr,
                &id,
                StatusCode::INTERNAL_SERVER_ERROR,
                "review session ended without a decision".to_string(),
            ),
        }
    }
}

/// PUT /api/v1/confirm_img -- reserved in the protocol, not implemented.
pub async fn confirm_img(State(state): State<AppState>) -> Response {
    protocol_error(
        &state.config.src_addr,
        "",
        StatusCode::NOT_IMPLEMENTED,
        "confirm_img is reserved and not implemented".to_string(),
    )
}

/// Build a protocol error response with the given status.
fn protocol_error(src_addr: &str, id: &str, status: StatusCode, error_info: String) -> Response {
    (status, Json(ErrorEnvelope::new(src_addr, id, error_info))).into_response()
}
