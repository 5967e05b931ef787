//! Integration tests for the notification listener surface.
//!
//! Cover required-field validation with correlation-id echoing, the
//! deferred and immediate response modes, the per-request `immed` override,
//! independence of concurrent notifications, and the reserved
//! `confirm_img` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, notify_body, post_json, put_json, wait_for_sessions};

// ---------------------------------------------------------------------------
// Test: missing `id` returns 400 with an empty id echo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_id_returns_400() {
    let (app, _reviews) = common::build_test_app(true);

    let mut body = notify_body("req-1");
    body.as_object_mut().unwrap().remove("id");

    let response = put_json(app, "/api/v1/notify_img", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["id"], "");
    assert_eq!(json["headers"]["src_addr"], common::TEST_SRC_ADDR);
    assert!(json["error_info"].as_str().unwrap().contains("id"));
}

// ---------------------------------------------------------------------------
// Test: missing `img_buff` echoes the parsed correlation id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_img_buff_echoes_id() {
    let (app, _reviews) = common::build_test_app(true);

    let mut body = notify_body("req-7");
    body.as_object_mut().unwrap().remove("img_buff");

    let response = put_json(app, "/api/v1/notify_img", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["id"], "req-7");
    assert!(json["error_info"].as_str().unwrap().contains("img_buff"));
}

// ---------------------------------------------------------------------------
// Test: missing `faces_data` returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_faces_data_returns_400() {
    let (app, reviews) = common::build_test_app(true);

    let mut body = notify_body("req-2");
    body.as_object_mut().unwrap().remove("faces_data");

    let response = put_json(app, "/api/v1/notify_img", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error_info"].as_str().unwrap().contains("faces_data"));

    // No session was opened for the rejected notification.
    assert_eq!(reviews.open_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: unreadable body returns 400 in the protocol envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400_envelope() {
    let (app, _reviews) = common::build_test_app(true);

    let request = axum::http::Request::builder()
        .method(axum::http::Method::PUT)
        .uri("/api/v1/notify_img")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(json["id"], "");
}

// ---------------------------------------------------------------------------
// Test: immediate mode acknowledges at once and opens a session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn immediate_mode_returns_ack() {
    let (app, reviews) = common::build_test_app(true);

    let response = put_json(app, "/api/v1/notify_img", notify_body("req-1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "req-1");
    assert_eq!(json["headers"]["src_addr"], common::TEST_SRC_ADDR);
    // The ack is not an error envelope.
    assert!(json.get("error").is_none());

    assert_eq!(reviews.open_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: headers.immed overrides the server's deferred default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn immed_flag_overrides_deferred_config() {
    let (app, reviews) = common::build_test_app(false);

    let mut body = notify_body("req-1");
    body["headers"]["immed"] = serde_json::json!(true);

    // Were the request deferred, this oneshot would hang until an operator
    // decision; the override makes it return the ack immediately.
    let response = put_json(app, "/api/v1/notify_img", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "req-1");
    assert_eq!(reviews.open_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: deferred mode returns the operator's decision as the response body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deferred_submit_returns_reply_with_unchanged_faces() {
    let (app, reviews) = common::build_test_app(false);

    let notify_app = app.clone();
    let notify = tokio::spawn(async move {
        put_json(notify_app, "/api/v1/notify_img", notify_body("req-1")).await
    });

    let session_id = common::wait_for_sessions(&reviews, 1).await[0];

    // Operator clicks submit without edits.
    let action = post_json(
        app,
        &format!("/api/v1/reviews/{session_id}/submit"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(action.status(), StatusCode::OK);

    let response = notify.await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["cmd"], "submit");
    assert_eq!(json["id"], "req-1");
    assert_eq!(json["headers"]["src_addr"], common::TEST_SRC_ADDR);
    // Face data comes back exactly as received.
    assert_eq!(
        json["faces_data"][0]["box"],
        serde_json::json!([10, 50, 40, 20])
    );
    assert_eq!(json["faces_data"][0]["cob"]["name"], "Ivan");
}

// ---------------------------------------------------------------------------
// Test: concurrent notifications resolve independently
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_notifications_resolve_independently() {
    let (app, reviews) = common::build_test_app(false);

    let app_a = app.clone();
    let notify_a = tokio::spawn(async move {
        put_json(app_a, "/api/v1/notify_img", notify_body("req-a")).await
    });
    let app_b = app.clone();
    let notify_b = tokio::spawn(async move {
        put_json(app_b, "/api/v1/notify_img", notify_body("req-b")).await
    });

    let sessions = wait_for_sessions(&reviews, 2).await;

    // Resolve in reverse arrival order with different commands; each caller
    // must receive its own session's decision.
    let cancel = post_json(
        app.clone(),
        &format!("/api/v1/reviews/{}/cancel", sessions[1]),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(cancel.status(), StatusCode::OK);

    let submit = post_json(
        app,
        &format!("/api/v1/reviews/{}/submit", sessions[0]),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(submit.status(), StatusCode::OK);

    let json_a = body_json(notify_a.await.unwrap()).await;
    let json_b = body_json(notify_b.await.unwrap()).await;

    // Arrival order of the two tasks is not deterministic; match by id.
    let (first, second) = if json_a["id"] == "req-a" {
        (json_a, json_b)
    } else {
        (json_b, json_a)
    };
    assert_eq!(first["id"], "req-a");
    assert_eq!(second["id"], "req-b");
    assert_ne!(first["cmd"], second["cmd"]);
}

// ---------------------------------------------------------------------------
// Test: confirm_img is reserved
// ---------------------------------------------------------------------------

#[tokio::test]
async fn confirm_img_is_not_implemented() {
    let (app, _reviews) = common::build_test_app(true);

    let response = put_json(app, "/api/v1/confirm_img", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert!(json["error_info"].as_str().unwrap().contains("reserved"));
}
