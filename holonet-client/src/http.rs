//! Concrete `reqwest`-backed implementation of [`ArchiveClient`].
//!
//! One shared request path (`get_json`) does the whole send → status triage →
//! body read → parse pipeline, so every endpoint reports failures through the
//! same [`ClientError`] taxonomy and the same log lines.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::traits::ArchiveClient;
use crate::types::{Character, Film, ListQuery, Page, Species, Starship, Vehicle};

/// Public SWAPI base URL.
pub(crate) const SWAPI_API_BASE: &str = "https://swapi.dev/api";

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whole-request timeout, including the body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the public Star Wars API.
///
/// Cheap to clone; the inner connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a client against the public `swapi.dev` API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(SWAPI_API_BASE)
    }

    /// Create a client against a different base URL (a mirror or a
    /// self-hosted instance). A trailing slash on the base is tolerated.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    /// Build the character list URL for a query.
    fn people_url(&self, query: &ListQuery) -> String {
        format!("{}/people/?{}", self.base_url, query.to_query_string())
    }

    /// Shared GET-and-parse path for every endpoint.
    async fn get_json<T>(&self, url: &str, resource: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("[{resource}] GET {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{resource}] Response Status: {}", status.as_u16());

        // Extract Retry-After before the response body is consumed
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status.as_u16() == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{resource}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ClientError::RateLimited {
                resource: resource.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string();
            log::warn!(
                "[{resource}] Request failed: {} {reason}",
                status.as_u16()
            );
            return Err(ClientError::HttpStatus {
                resource: resource.to_string(),
                status: status.as_u16(),
                reason,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                resource: resource.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{resource}] Response Body: {}", truncate_for_log(&body));

        serde_json::from_str(&body).map_err(|e| {
            log::error!("[{resource}] JSON parse failed: {e}");
            ClientError::ParseError {
                resource: resource.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveClient for SwapiClient {
    async fn list_characters(&self, query: &ListQuery) -> Result<Page<Character>> {
        let query = query.validated();
        self.get_json(&self.people_url(&query), "people").await
    }

    async fn get_film(&self, url: &str) -> Result<Film> {
        self.get_json(url, "films").await
    }

    async fn get_vehicle(&self, url: &str) -> Result<Vehicle> {
        self.get_json(url, "vehicles").await
    }

    async fn get_species(&self, url: &str) -> Result<Species> {
        self.get_json(url, "species").await
    }

    async fn get_starship(&self, url: &str) -> Result<Starship> {
        self.get_json(url, "starships").await
    }
}

/// Create the shared HTTP client with uniform timeouts.
#[allow(clippy::expect_used)]
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Maximum number of bytes of response body to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// Truncate a response body for logging, respecting char boundaries.
fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let cut = (0..=LOG_BODY_LIMIT)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!(
        "{}... [truncated, total {} bytes]",
        &body[..cut],
        body.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_url_includes_both_parameters() {
        let client = SwapiClient::with_base_url("https://example.test/api");
        let query = ListQuery {
            page: 2,
            search: "luke sky".to_string(),
        };
        assert_eq!(
            client.people_url(&query),
            "https://example.test/api/people/?search=luke%20sky&page=2"
        );
    }

    #[test]
    fn people_url_with_default_query() {
        let client = SwapiClient::with_base_url("https://example.test/api");
        assert_eq!(
            client.people_url(&ListQuery::default()),
            "https://example.test/api/people/?search=&page=1"
        );
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = SwapiClient::with_base_url("https://example.test/api/");
        assert_eq!(
            client.people_url(&ListQuery::default()),
            "https://example.test/api/people/?search=&page=1"
        );
    }

    #[test]
    fn default_client_targets_public_api() {
        let client = SwapiClient::default();
        assert!(
            client
                .people_url(&ListQuery::default())
                .starts_with("https://swapi.dev/api/people/")
        );
    }

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_for_log("{\"count\":82}"), "{\"count\":82}");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(LOG_BODY_LIMIT + 50);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(LOG_BODY_LIMIT)));
        assert!(out.ends_with(&format!("total {} bytes]", LOG_BODY_LIMIT + 50)));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // 某些响应包含多字节字符，截断不能落在字符中间
        let body = "é".repeat(LOG_BODY_LIMIT);
        let out = truncate_for_log(&body);
        assert!(out.contains("... [truncated"));
    }
}
