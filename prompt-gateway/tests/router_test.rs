//! Router-level tests using `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use prompt_gateway::services::providers::mock::MockTextProvider;
use prompt_gateway::startup::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn router(provider: MockTextProvider) -> axum::Router {
    let config = common::test_config("http://127.0.0.1:9");
    build_router(AppState::new(&config, Arc::new(provider)))
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/get-output?prompt=Hello")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = router(MockTextProvider::replying(r#"{"output":"Hi"}"#))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/summarize")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = router(MockTextProvider::new(true))
        .oneshot(request)
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn query_string_is_percent_decoded() {
    let provider = Arc::new(MockTextProvider::replying(r#"{"summary":"s"}"#));
    let config = common::test_config("http://127.0.0.1:9");
    let app = build_router(AppState::new(&config, provider.clone()));

    let request = Request::builder()
        .uri("/summarize?text=Hello%2C%20world%0Aagain")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        provider.calls()[0].prompt,
        "Summarize the following text: Hello, world\nagain"
    );
}

#[tokio::test]
async fn relayed_json_keeps_key_order() {
    let reply = r#"{"marks_scored":3,"explanation":"ok","correct_answer":"c"}"#;
    let request = Request::builder()
        .uri("/evaluate-answer?question=Q&answer=a&max_marks=1")
        .body(Body::empty())
        .unwrap();

    let response = router(MockTextProvider::replying(reply))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], reply.as_bytes());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();

    let response = router(MockTextProvider::new(true))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_query_key_gets_json_bad_request() {
    let provider = Arc::new(MockTextProvider::replying(r#"{"output":"Hi"}"#));
    let config = common::test_config("http://127.0.0.1:9");
    let app = build_router(AppState::new(&config, provider.clone()));

    let request = Request::builder()
        .uri("/get-output?prompt=a&prompt=b")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("prompt"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn infinite_max_marks_reject_the_answer() {
    let provider = Arc::new(MockTextProvider::new(true));
    let config = common::test_config("http://127.0.0.1:9");
    let app = build_router(AppState::new(&config, provider.clone()));

    let request = Request::builder()
        .uri("/evaluate-answer?question=Q&answer=a&max_marks=Infinity")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["error"],
        "Answer is too short. You need to write at least Infinity more lines."
    );
    assert_eq!(provider.call_count(), 0);
}
