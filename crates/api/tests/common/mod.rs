// Shared between several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use controlpanel_api::config::ServerConfig;
use controlpanel_api::routes;
use controlpanel_api::state::AppState;
use controlpanel_core::types::SessionId;
use controlpanel_delivery::ControlDelivery;
use controlpanel_review::ReviewManager;

/// Advertised address used by the test server configuration.
pub const TEST_SRC_ADDR: &str = "http://panel.test:8080";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(immediate_response: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        src_addr: TEST_SRC_ADDR.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_request_bytes: 32 * 1024 * 1024,
        immediate_response,
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, body limit) that production uses. Also returns the
/// review manager so tests can observe and resolve sessions directly.
pub fn build_test_app(immediate_response: bool) -> (Router, Arc<ReviewManager>) {
    let config = test_config(immediate_response);
    let reviews = Arc::new(ReviewManager::new(config.src_addr.clone()));

    let state = AppState {
        config: Arc::new(config.clone()),
        reviews: Arc::clone(&reviews),
        delivery: Arc::new(ControlDelivery::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(axum::extract::DefaultBodyLimit::max(config.max_request_bytes))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    (app, reviews)
}

/// A complete, valid `notify_img` body with one face.
pub fn notify_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "headers": {"src_addr": "http://127.0.0.1:1"},
        "id": id,
        "img_buff": "aW1n",
        "faces_data": [
            {"box": [10, 50, 40, 20], "cob": {"name": "Ivan"}}
        ]
    })
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a request with a JSON body against the app.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// PUT a JSON body against the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Wait until the registry holds at least `count` open sessions, returning
/// the FIFO-ordered session ids. Panics after ~2 s.
pub async fn wait_for_sessions(reviews: &ReviewManager, count: usize) -> Vec<SessionId> {
    for _ in 0..200 {
        let sessions = reviews.list().await;
        if sessions.len() >= count {
            return sessions.into_iter().map(|s| s.session_id).collect();
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {count} open review session(s)");
}
