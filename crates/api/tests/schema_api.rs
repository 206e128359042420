//! Integration tests for the schema, defaults, and preview endpoints.
//!
//! These endpoints are served from the in-memory schema registry, so the
//! tests run against the full middleware stack without a database.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use common::build_test_app;

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = build_test_app();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = build_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Schema listing and lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schema_slugs_include_built_in_catalog() {
    let (status, json) = get("/api/v1/templates/schemas").await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(slugs.contains(&"seni-seviyorum"));
    assert!(slugs.contains(&"yil-donumu"));
    assert!(slugs.contains(&"is-tebrigi"));
}

#[tokio::test]
async fn schema_lookup_returns_ordered_fields() {
    let (status, json) = get("/api/v1/templates/seni-seviyorum/schema").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["slug"], "seni-seviyorum");

    let fields = json["data"]["fields"].as_array().unwrap();
    assert!(!fields.is_empty());
    assert_eq!(fields[0]["key"], "recipientName");
    // Descriptor shape: every field carries its kind and label.
    assert!(fields[0]["kind"].is_string());
    assert!(fields[0]["label"].is_string());
}

#[tokio::test]
async fn schema_lookup_for_unknown_slug_returns_404() {
    let (status, json) = get("/api/v1/templates/does-not-exist/schema").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn defaults_contain_only_defaulted_keys() {
    let (status, json) = get("/api/v1/templates/seni-seviyorum/defaults").await;

    assert_eq!(status, StatusCode::OK);
    let defaults = json["data"].as_object().unwrap();
    assert!(defaults.contains_key("mainMessage"));
    // recipientName has no default; absence must be preserved, not turned
    // into an empty string.
    assert!(!defaults.contains_key("recipientName"));
}

#[tokio::test]
async fn defaults_for_unknown_slug_are_empty_not_an_error() {
    let (status, json) = get("/api/v1/templates/does-not-exist/defaults").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_object().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preview_with_unknown_style_falls_back_to_modern() {
    let (status, json) = post_json(
        "/api/v1/templates/seni-seviyorum/preview",
        json!({ "style": "vapor-wave" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["style"], "modern");
}

#[tokio::test]
async fn preview_for_unknown_slug_degrades_to_fallback_card() {
    let (status, json) = post_json("/api/v1/templates/does-not-exist/preview", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["recipient_name"], "Örnek Alıcı");
    assert!(json["data"]["fields"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn preview_resolves_user_values_over_defaults() {
    let (status, json) = post_json(
        "/api/v1/templates/seni-seviyorum/preview",
        json!({
            "recipient_name": "Ayşe",
            "text_fields": { "footerMessage": "Bize özel mesaj" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["recipient_name"], "Ayşe");

    let fields = json["data"]["fields"].as_array().unwrap();
    let footer = fields
        .iter()
        .find(|f| f["key"] == "footerMessage")
        .unwrap();
    assert_eq!(footer["value"], "Bize özel mesaj");
}

#[tokio::test]
async fn preview_partitions_fields_by_style() {
    let (_, modern) = post_json(
        "/api/v1/templates/yil-donumu/preview",
        json!({ "style": "modern" }),
    )
    .await;
    let (_, fun) = post_json(
        "/api/v1/templates/yil-donumu/preview",
        json!({ "style": "eglenceli" }),
    )
    .await;

    let keys = |card: &serde_json::Value| -> Vec<String> {
        card["data"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["key"].as_str().unwrap().to_string())
            .collect()
    };

    let modern_keys = keys(&modern);
    let fun_keys = keys(&fun);

    assert!(modern_keys.contains(&"headlineMessage".to_string()));
    assert!(!modern_keys.contains(&"quizHeadline".to_string()));

    assert!(fun_keys.contains(&"quizHeadline".to_string()));
    assert!(!fun_keys.contains(&"headlineMessage".to_string()));

    // Common fields appear in both variants.
    assert!(modern_keys.contains(&"recipientName".to_string()));
    assert!(fun_keys.contains(&"recipientName".to_string()));
}
