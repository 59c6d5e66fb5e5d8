//! Common utilities for NetBox API client
//!
//! Provides shared functionality used across all API modules.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

pub use crate::models::PaginatedResponse;

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path relative to the base URL
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Make a GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(NetBoxError::Authentication(format!(
                "GET {} rejected: {} - {}",
                path, status, body
            )));
        }

        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(NetBoxError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetBoxError::Api(format!(
                "GET {} failed: {} - {}",
                path, status, body
            )));
        }

        // Keep the body around so decode failures can show what NetBox sent
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
