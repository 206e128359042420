//! Integration tests for admin catalog validation and rate limiting.
//!
//! All requests here are rejected by validation or the rate limiter before
//! any repository call, so no database is needed.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use common::{build_test_app, build_test_app_with_config, test_config};

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    client_ip: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(ip) = client_ip {
        builder = builder.header("x-forwarded-for", ip);
    }
    let request = builder
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Admin list filter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_list_rejects_unknown_status() {
    let (status, json) = send(
        build_test_app(),
        "GET",
        "/api/v1/admin/templates?status=archived",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn admin_list_rejects_unknown_audience() {
    let (status, json) = send(
        build_test_app(),
        "GET",
        "/api/v1/admin/templates?audience=goth",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn public_list_rejects_unknown_audience() {
    let (status, json) = send(
        build_test_app(),
        "GET",
        "/api/v1/templates?audience=goth",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Admin create validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_create_requires_title() {
    let (status, json) = send(
        build_test_app(),
        "POST",
        "/api/v1/admin/templates",
        Some(json!({ "slug": "yeni-kart", "audience": "teen" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required field: title");
}

#[tokio::test]
async fn admin_create_rejects_malformed_slug() {
    let (status, json) = send(
        build_test_app(),
        "POST",
        "/api/v1/admin/templates",
        Some(json!({ "title": "Yeni Kart", "slug": "Yeni Kart!", "audience": "teen" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn admin_create_rejects_unknown_audience() {
    let (status, json) = send(
        build_test_app(),
        "POST",
        "/api/v1/admin/templates",
        Some(json!({ "title": "Yeni Kart", "slug": "yeni-kart", "audience": "goth" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Order validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn order_rejects_blank_recipient() {
    let (status, json) = send(
        build_test_app(),
        "POST",
        "/api/v1/orders",
        Some(json!({
            "template_id": 1,
            "recipient_name": "   ",
            "sender_name": "Mehmet",
            "message": "Nice seni seneler"
        })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn order_rejects_malformed_email() {
    let (status, json) = send(
        build_test_app(),
        "POST",
        "/api/v1/orders",
        Some(json!({
            "template_id": 1,
            "recipient_name": "Ayşe",
            "sender_name": "Mehmet",
            "message": "Nice seni seneler",
            "buyer_email": "not-an-email"
        })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_return_429_when_budget_exhausted() {
    let mut config = test_config();
    config.rate_limit_max_requests = 3;
    let app = build_test_app_with_config(config);

    // The first three requests fail validation (400); the limiter counts
    // them anyway, so the fourth is rejected outright.
    for _ in 0..3 {
        let (status, _) = send(
            app.clone(),
            "GET",
            "/api/v1/admin/templates?status=archived",
            None,
            Some("203.0.113.7"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, json) = send(
        app.clone(),
        "GET",
        "/api/v1/admin/templates?status=archived",
        None,
        Some("203.0.113.7"),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["code"], "RATE_LIMITED");

    // A different client IP still has its own budget.
    let (status, _) = send(
        app,
        "GET",
        "/api/v1/admin/templates?status=archived",
        None,
        Some("203.0.113.8"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn public_routes_are_not_rate_limited() {
    let mut config = test_config();
    config.rate_limit_max_requests = 1;
    let app = build_test_app_with_config(config);

    for _ in 0..5 {
        let (status, _) = send(
            app.clone(),
            "GET",
            "/api/v1/templates/seni-seviyorum/defaults",
            None,
            Some("203.0.113.9"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
