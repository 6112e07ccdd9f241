//! REST API helpers for communicating with the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with formatted detail instead of panics.
//! HTTP-level failures (non-2xx) and network/parse failures both surface as
//! `Err`; the chat layer collapses either kind into one fixed transcript
//! message, so the distinction here only feeds the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisResponse, HealthResponse};
#[cfg(feature = "hydrate")]
use super::types::AnalyzeRequest;

/// Base URL of the analysis backend. The backend runs on its own origin
/// with permissive CORS.
pub const API_BASE: &str = "http://localhost:8000";

#[cfg(any(test, feature = "hydrate"))]
fn analyze_endpoint() -> String {
    format!("{API_BASE}/api/analyze-comprehensive")
}

#[cfg(any(test, feature = "hydrate"))]
fn health_endpoint() -> String {
    format!("{API_BASE}/health")
}

#[cfg(any(test, feature = "hydrate"))]
fn analyze_request_failed_message(status: u16) -> String {
    format!("analyze request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn health_request_failed_message(status: u16) -> String {
    format!("health request failed: {status}")
}

/// Submit a patent description to `POST /api/analyze-comprehensive`.
///
/// # Errors
///
/// Returns a formatted error string when the request cannot be sent, the
/// response status is non-2xx, or the body fails to parse.
pub async fn analyze(patent_text: &str) -> Result<AnalysisResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = AnalyzeRequest {
            patent_text: patent_text.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&analyze_endpoint())
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(analyze_request_failed_message(resp.status()));
        }
        resp.json::<AnalysisResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = patent_text;
        Err("not available on server".to_owned())
    }
}

/// Fetch the backend's subsystem statuses from `GET /health`.
///
/// # Errors
///
/// Returns a formatted error string on request, status, or parse failure.
pub async fn fetch_health() -> Result<HealthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&health_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(health_request_failed_message(resp.status()));
        }
        resp.json::<HealthResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
