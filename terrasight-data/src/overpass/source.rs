//! HTTP client for the Overpass interpreter.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use terrasight_core::{
    Coordinate, DEFAULT_ENDPOINT, DEFAULT_MAX_ELEMENTS, FeatureSource, QueryError,
    RawFeatureElement,
};

use super::query::{QUERY_TIMEOUT_SECS, build_query};
use super::wire::OverpassResponse;
use crate::{DEFAULT_USER_AGENT, SourceBuildError, error::parse_url};

/// Configuration for [`OverpassFeatureSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassConfig {
    /// Interpreter URL (e.g., `"https://overpass-api.de/api/interpreter"`).
    pub endpoint: String,
    /// Client-side request timeout.
    pub timeout: Duration,
    /// Maximum number of elements requested and returned.
    pub max_elements: usize,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(QUERY_TIMEOUT_SECS),
            max_elements: DEFAULT_MAX_ELEMENTS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OverpassConfig {
    /// Create a configuration for `endpoint` with default settings.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the element cap.
    #[must_use]
    pub const fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// [`FeatureSource`] backed by an Overpass interpreter.
///
/// Each query is a single form-encoded POST; failures are mapped onto
/// [`QueryError`] and never retried.
pub struct OverpassFeatureSource {
    client: Client,
    config: OverpassConfig,
}

impl std::fmt::Debug for OverpassFeatureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverpassFeatureSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OverpassFeatureSource {
    /// Create a source for `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the HTTP client
    /// fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(OverpassConfig::new(endpoint))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the HTTP client
    /// fails to build.
    pub fn with_config(config: OverpassConfig) -> Result<Self, SourceBuildError> {
        parse_url(&config.endpoint)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// The configuration the source was built with.
    #[must_use]
    pub const fn config(&self) -> &OverpassConfig {
        &self.config
    }

    /// Decode a response body into at most `max_elements` elements.
    fn parse_body(&self, body: &[u8]) -> Result<Vec<RawFeatureElement>, QueryError> {
        let response: OverpassResponse =
            serde_json::from_slice(body).map_err(|err| QueryError::Parse {
                message: err.to_string(),
            })?;
        Ok(response.into_elements(self.config.max_elements))
    }

    /// Convert a reqwest error to a [`QueryError`].
    fn convert_reqwest_error(&self, error: &reqwest::Error) -> QueryError {
        let url = self.config.endpoint.clone();
        if error.is_timeout() {
            return QueryError::Timeout {
                url,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return QueryError::Http {
                url,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        QueryError::Network {
            url,
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl FeatureSource for OverpassFeatureSource {
    async fn query(
        &self,
        coordinate: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<RawFeatureElement>, QueryError> {
        let query = build_query(coordinate, radius_m, self.config.max_elements);
        debug!("querying {} around {coordinate}", self.config.endpoint);

        let body = self
            .client
            .post(&self.config.endpoint)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;

        self.parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use terrasight_core::ElementKind;

    #[fixture]
    fn source() -> OverpassFeatureSource {
        OverpassFeatureSource::with_config(OverpassConfig::default().with_max_elements(2))
            .expect("source should build")
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = OverpassConfig::new("https://overpass.example/api/interpreter")
            .with_timeout(Duration::from_secs(60))
            .with_max_elements(10)
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.endpoint, "https://overpass.example/api/interpreter");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_elements, 10);
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn default_timeout_matches_query_hint() {
        assert_eq!(
            OverpassConfig::default().timeout,
            Duration::from_secs(QUERY_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn rejects_relative_endpoint() {
        let err = OverpassFeatureSource::new("/api/interpreter").expect_err("needs a base");
        assert!(matches!(err, SourceBuildError::InvalidUrl { .. }));
    }

    #[rstest]
    fn parse_body_caps_elements(source: OverpassFeatureSource) {
        let body = br#"{"elements": [
            {"type": "way", "tags": {"building": "yes"}},
            {"type": "way", "tags": {"building": "house"}},
            {"type": "way", "tags": {"building": "shed"}}
        ]}"#;

        let elements = source.parse_body(body).expect("should parse");

        assert_eq!(elements.len(), 2);
        assert!(elements.iter().all(|element| element.kind == ElementKind::Way));
    }

    #[rstest]
    fn parse_body_reports_malformed_json(source: OverpassFeatureSource) {
        let err = source
            .parse_body(b"<html>rate limited</html>")
            .expect_err("should fail");
        assert!(matches!(err, QueryError::Parse { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let source = OverpassFeatureSource::with_config(
            OverpassConfig::new("http://127.0.0.1:1/api/interpreter")
                .with_timeout(Duration::from_secs(5)),
        )
        .expect("source should build");
        let coordinate = Coordinate::new(23.8103, 90.4125).expect("valid coordinate");

        let err = source
            .query(coordinate, 1_200.0)
            .await
            .expect_err("nothing listens on port 1");

        match err {
            QueryError::Network { url, .. } => {
                assert_eq!(url, "http://127.0.0.1:1/api/interpreter");
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
