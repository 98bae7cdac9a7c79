//! Typed client for the dashboard's JSON API.
//!
//! Works natively and on `wasm32` (reqwest uses `fetch` in the browser). The
//! base URL must be absolute, e.g. `http://localhost:3000` or the page origin.

use crate::filter::ReadingFilter;
use crate::reading::{DaySummary, Reading};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures while talking to the API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or protocol failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape we expected
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one API origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/cities`
    pub async fn cities(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/api/cities", None).await
    }

    /// `GET /api/weather`
    pub async fn readings(&self, filter: &ReadingFilter) -> Result<Vec<Reading>, ClientError> {
        self.get_json("/api/weather", Some(filter)).await
    }

    /// `GET /api/summary`
    pub async fn summary(&self, filter: &ReadingFilter) -> Result<Vec<DaySummary>, ClientError> {
        self.get_json("/api/summary", Some(filter)).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&ReadingFilter>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if let Some(filter) = filter {
            request = request.query(filter);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("GET {} failed with {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull the `error` field out of a `{ "error": ... }` body, falling back to the
/// raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(error_message(r#"{"error":"no such table"}"#), "no such table");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
