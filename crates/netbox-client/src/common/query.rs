//! Query utilities for NetBox API
//!
//! Provides helpers for building list queries against NetBox endpoints.

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::Deserialize;

/// Build the request path for a list endpoint with optional filters
pub fn list_path(http: &HttpClient, endpoint: &str, filters: &[(&str, &str)]) -> String {
    let url = format!("/api/{}/", endpoint);

    if filters.is_empty() {
        url
    } else {
        format!("{}?{}", url, http.build_query_string(filters))
    }
}

/// Fetch a single page of a list endpoint
///
/// Only the first page is read; the `next` link is returned untouched in the
/// response for callers that care.
pub async fn list_page<T: for<'de> Deserialize<'de>>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
) -> Result<PaginatedResponse<T>, NetBoxError> {
    http.get(&list_path(http, endpoint, filters)).await
}
