//! Tests for HTTP controller endpoints.
//!
//! Handlers are either called directly with an extracted `State`, or driven through the full
//! router when the test depends on routing, body extraction or the error mapping.

mod admin;
mod game;
mod home;
mod log;
mod player;
mod upcoming;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use navi::server::{model::app::AppState, router::routes};
use navi_test_utils::prelude::*;
use tower::ServiceExt;

/// Send a request through the application router and decode the JSON body, if any.
async fn send(
    test: &TestContext,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
