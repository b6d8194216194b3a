//! JSON request and response models for the HTTP API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /translate`.
///
/// Missing fields deserialize as empty strings and are rejected during
/// validation, so every input problem gets the same 400 response shape.
///
/// # Example
///
/// ```
/// use boli::server::models::TranslateRequest;
///
/// let json = r#"{"text": "I am happy", "source_lang": "en"}"#;
/// let req: TranslateRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(req.text, "I am happy");
/// assert!(req.target_lang.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
}

/// Response body for a successful translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    /// Lower-cased source language code
    pub source_lang: String,
    /// Lower-cased target language code
    pub target_lang: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
