//! Integration tests for the HTTP server.
//!
//! Uses Axum's tower integration for in-process testing
//! without starting a real TCP listener.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt; // for oneshot()

use boli::dictionary::{lexicon, DictionaryStore, PhraseDictionary};
use boli::error::{BoliError, Result};
use boli::grammar::GrammarCorrectors;
use boli::language::LanguagePair;
use boli::server::build_app;
use boli::server::models::{ErrorResponse, HealthResponse, TranslateResponse};
use boli::server::state::AppState;
use boli::translate::{ConnectivityProbe, OnlineTranslator, TranslationOrchestrator};

struct Unreachable;

#[async_trait]
impl ConnectivityProbe for Unreachable {
    async fn is_reachable(&self) -> bool {
        false
    }
}

struct NeverCalled;

#[async_trait]
impl OnlineTranslator for NeverCalled {
    async fn translate(&self, text: &str, _pair: LanguagePair) -> Result<String> {
        Err(BoliError::ExternalService(format!("unexpected online call for '{}'", text)))
    }
}

fn test_app() -> Router {
    let mut builder = PhraseDictionary::builder();
    builder.insert_parallel("How are you", "आप कैसे हैं", "तुम कन छा");
    lexicon::merge_builtin(&mut builder);
    let dictionary = Arc::new(DictionaryStore::new(builder.build()));

    let translator = TranslationOrchestrator::new(dictionary, GrammarCorrectors::default())
        .with_online(Arc::new(NeverCalled), Arc::new(Unreachable));
    build_app(AppState::new(translator))
}

async fn post_translate(app: Router, body: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn health_endpoint_returns_healthy() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn translate_english_to_gadhwali_word_level() {
    let (status, body) = post_translate(
        test_app(),
        r#"{"text": "I am happy", "source_lang": "en", "target_lang": "gadhwali"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: TranslateResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.translation, "म्यर खुसी छू");
    assert_eq!(response.source_lang, "en");
    assert_eq!(response.target_lang, "gadhwali");
}

#[tokio::test]
async fn translate_codes_are_case_insensitive() {
    let (status, body) = post_translate(
        test_app(),
        r#"{"text": "How are you", "source_lang": "EN", "target_lang": "Gadhwali"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: TranslateResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.translation, "तुम कन छा");
    assert_eq!(response.source_lang, "en");
    assert_eq!(response.target_lang, "gadhwali");
}

#[tokio::test]
async fn translate_falls_back_to_dictionary_when_offline() {
    let (status, body) = post_translate(
        test_app(),
        r#"{"text": "how are you", "source_lang": "en", "target_lang": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: TranslateResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.translation, "आप कैसे हैं");
}

#[tokio::test]
async fn translate_empty_text_returns_400() {
    let (status, body) = post_translate(
        test_app(),
        r#"{"text": "   ", "source_lang": "en", "target_lang": "hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Text is required");
}

#[tokio::test]
async fn translate_missing_target_returns_400() {
    let (status, body) = post_translate(test_app(), r#"{"text": "hello", "source_lang": "en"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Target language is required");
}

#[tokio::test]
async fn translate_unsupported_language_returns_400() {
    let (status, body) = post_translate(
        test_app(),
        r#"{"text": "hello", "source_lang": "en", "target_lang": "fr"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("en, hi, gadhwali"), "got: {}", error.error);
}

#[tokio::test]
async fn translate_invalid_json_returns_400() {
    let (status, body) = post_translate(test_app(), "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "No JSON data provided");
}

#[tokio::test]
async fn translate_preflight_allows_cross_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/translate")
                .header("origin", "http://localhost:8080")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn translate_response_carries_cors_header() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("origin", "http://localhost:8080")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"text": "How are you", "source_lang": "en", "target_lang": "hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
