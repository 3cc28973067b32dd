//! HTTP calls to the external scoring service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the service is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so the widget decides what a
//! failure means. The shipped policy is to log and keep the last good data;
//! no retries are attempted and nothing is surfaced to the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AssessmentResult, HistoryEntry};
use crate::config::ApiConfig;

#[cfg(feature = "hydrate")]
use super::types::AssessmentRequest;

/// Failure at the scoring-service boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable reply (connection refused, DNS,
    /// aborted, request could not be built).
    #[error("request failed: {0}")]
    Transport(String),
    /// A reply arrived but its body was not the expected JSON. Non-2xx
    /// replies land here too: status is not checked separately, the body
    /// either decodes or it does not.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn assess_endpoint(backend_url: &str) -> String {
    format!("{backend_url}/api/assess")
}

#[cfg(any(test, feature = "hydrate"))]
fn history_endpoint(backend_url: &str) -> String {
    format!("{backend_url}/api/history")
}

/// Submit `text` for scoring via `POST /api/assess`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the call cannot complete and
/// [`ApiError::Decode`] when the reply body is not a valid result.
pub async fn assess(config: &ApiConfig, text: &str) -> Result<AssessmentResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = AssessmentRequest { text: text.to_owned() };
        let resp = gloo_net::http::Request::post(&assess_endpoint(&config.backend_url))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        resp.json::<AssessmentResult>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the full assessment history via `GET /api/history`.
///
/// The service returns the list most recent first; callers replace their copy
/// wholesale rather than merging.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the call cannot complete and
/// [`ApiError::Decode`] when the reply body is not a valid entry list.
pub async fn fetch_history(config: &ApiConfig) -> Result<Vec<HistoryEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&history_endpoint(&config.backend_url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        resp.json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
