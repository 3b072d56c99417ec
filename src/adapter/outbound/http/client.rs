//! reqwest-backed client for the bets REST API.
//!
//! Bodies go out as JSON text without a content type header, and responses
//! come back as raw text whatever their status. Only failures that leave no
//! response at all are errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use super::settings::{HttpConfig, TargetConfig};
use crate::domain::{BetId, CreateBetRequest, UpdateBetRequest};
use crate::error::{ConfigError, Result};
use crate::port::{ApiResponse, BetsApi};

/// HTTP client for one bets collection endpoint.
pub struct HttpBetsClient {
    http: HttpClient,
    /// Collection URL, e.g. `http://localhost:3000/bets`.
    base_url: Url,
    display_url: String,
}

impl HttpBetsClient {
    /// Create a client with transport defaults.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(base_url, HttpClient::new())
    }

    /// Create a client from configuration.
    pub fn from_config(target: &TargetConfig, http: &HttpConfig) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if http.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(http.timeout_ms));
        }
        if http.connect_timeout_ms > 0 {
            builder = builder.connect_timeout(Duration::from_millis(http.connect_timeout_ms));
        }
        Self::with_http(&target.base_url, builder.build()?)
    }

    fn with_http(base_url: &str, http: HttpClient) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            http,
            display_url: base_url.as_str().trim_end_matches('/').to_owned(),
            base_url,
        })
    }

    /// URL of a single bet: the id is appended as one encoded path segment.
    #[must_use]
    pub fn item_url(&self, bet_id: &BetId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(bet_id.as_str());
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "Received response");

        Ok(ApiResponse { status, body })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }
}

/// Validate a collection URL: absolute, http(s), able to take path segments.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::MissingField { field: "base_url" }.into());
    }

    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: "URL cannot take a path".into(),
        }
        .into());
    }
    Ok(url)
}

#[async_trait]
impl BetsApi for HttpBetsClient {
    async fn create(&self, request: &CreateBetRequest) -> Result<ApiResponse> {
        let body = serde_json::to_string(request)?;
        self.send(self.request(Method::POST, self.base_url.clone()).body(body))
            .await
    }

    async fn list(&self) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, self.base_url.clone()))
            .await
    }

    async fn get(&self, bet_id: &BetId) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, self.item_url(bet_id)))
            .await
    }

    async fn update(
        &self,
        bet_id: &BetId,
        request: &UpdateBetRequest,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_string(request)?;
        self.send(self.request(Method::POST, self.item_url(bet_id)).body(body))
            .await
    }

    async fn delete(&self, bet_id: &BetId) -> Result<ApiResponse> {
        self.send(self.request(Method::DELETE, self.item_url(bet_id)))
            .await
    }

    fn endpoint(&self) -> &str {
        &self.display_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    #[test]
    fn accepts_default_endpoint() {
        let client = HttpBetsClient::new("http://localhost:3000/bets").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/bets");
    }

    #[test]
    fn rejects_empty_and_foreign_urls() {
        assert!(matches!(
            HttpBetsClient::new("  "),
            Err(Error::Config(ConfigError::MissingField { field: "base_url" }))
        ));
        assert!(matches!(
            HttpBetsClient::new("localhost:3000/bets"),
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            HttpBetsClient::new("ftp://example.com/bets"),
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(HttpBetsClient::new("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn from_config_applies_timeouts() {
        let target = TargetConfig::default();
        let http = HttpConfig {
            timeout_ms: 1500,
            connect_timeout_ms: 500,
        };
        let client = HttpBetsClient::from_config(&target, &http).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/bets");
    }

    // -------------------------------------------------------------------------
    // Item URLs
    // -------------------------------------------------------------------------

    #[test]
    fn item_url_appends_id() {
        let client = HttpBetsClient::new("http://localhost:3000/bets").unwrap();
        let url = client.item_url(&BetId::from("x1"));
        assert_eq!(url.as_str(), "http://localhost:3000/bets/x1");
    }

    #[test]
    fn item_url_tolerates_trailing_slash() {
        let client = HttpBetsClient::new("http://localhost:3000/bets/").unwrap();
        let url = client.item_url(&BetId::from("x1"));
        assert_eq!(url.as_str(), "http://localhost:3000/bets/x1");
        assert_eq!(client.endpoint(), "http://localhost:3000/bets");
    }

    #[test]
    fn item_url_encodes_id_as_one_segment() {
        let client = HttpBetsClient::new("http://localhost:3000/bets").unwrap();
        let url = client.item_url(&BetId::from("a/b c"));
        assert_eq!(url.as_str(), "http://localhost:3000/bets/a%2Fb%20c");
    }
}
