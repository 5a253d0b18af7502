//! Point-sample client for a live vegetation index such as NDVI.
//!
//! The service is addressed by a URL template carrying `{lat}` and `{lng}`
//! placeholders and must answer with a JSON object holding a numeric `ndvi`
//! field. Any other shape is reported as [`OverrideError::Malformed`].

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use terrasight_core::{
    ConfigError, Coordinate, LAT_PLACEHOLDER, LNG_PLACEHOLDER, OverrideError,
    VegetationIndexSource,
};

use crate::{DEFAULT_USER_AGENT, SourceBuildError, error::parse_url};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpVegetationIndexSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VegetationIndexConfig {
    /// URL template, e.g. `"https://ndvi.example/point?lat={lat}&lng={lng}"`.
    pub template: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl VegetationIndexConfig {
    /// Create a configuration for `template` with default settings.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Substitute `coordinate` into the template.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::Coordinate;
    /// use terrasight_data::VegetationIndexConfig;
    ///
    /// let config = VegetationIndexConfig::new("https://ndvi.example/p?lat={lat}&lng={lng}");
    /// let url = config.url_for(Coordinate::new(23.8103, 90.4125)?);
    /// assert_eq!(url, "https://ndvi.example/p?lat=23.8103&lng=90.4125");
    /// # Ok::<(), terrasight_core::CoordinateError>(())
    /// ```
    #[must_use]
    pub fn url_for(&self, coordinate: Coordinate) -> String {
        self.template
            .replace(LAT_PLACEHOLDER, &coordinate.lat().to_string())
            .replace(LNG_PLACEHOLDER, &coordinate.lng().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct IndexSample {
    ndvi: f64,
}

/// [`VegetationIndexSource`] backed by an HTTP point service.
pub struct HttpVegetationIndexSource {
    client: Client,
    config: VegetationIndexConfig,
}

impl std::fmt::Debug for HttpVegetationIndexSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpVegetationIndexSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpVegetationIndexSource {
    /// Create a source for `template` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks a placeholder, does not form a
    /// URL, or the HTTP client fails to build.
    pub fn new(template: impl Into<String>) -> Result<Self, SourceBuildError> {
        Self::with_config(VegetationIndexConfig::new(template))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the template lacks a placeholder, does not form a
    /// URL, or the HTTP client fails to build.
    pub fn with_config(config: VegetationIndexConfig) -> Result<Self, SourceBuildError> {
        if !(config.template.contains(LAT_PLACEHOLDER) && config.template.contains(LNG_PLACEHOLDER))
        {
            return Err(ConfigError::MissingPlaceholder {
                template: config.template,
            }
            .into());
        }
        parse_url(
            &config
                .template
                .replace(LAT_PLACEHOLDER, "0")
                .replace(LNG_PLACEHOLDER, "0"),
        )?;
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
    pub const fn config(&self) -> &VegetationIndexConfig {
        &self.config
    }
}

/// Decode a `{ndvi: number}` body.
fn parse_sample(body: &[u8]) -> Result<f64, OverrideError> {
    let sample: IndexSample = serde_json::from_slice(body).map_err(|err| OverrideError::Malformed {
        message: err.to_string(),
    })?;
    if sample.ndvi.is_finite() {
        Ok(sample.ndvi)
    } else {
        Err(OverrideError::NonFinite)
    }
}

#[async_trait]
impl VegetationIndexSource for HttpVegetationIndexSource {
    async fn sample(&self, coordinate: Coordinate) -> Result<f64, OverrideError> {
        let url = self.config.url_for(coordinate);
        debug!("sampling vegetation index at {url}");
        let transport = |err: reqwest::Error| OverrideError::Transport {
            url: url.clone(),
            message: err.to_string(),
        };

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;

        parse_sample(&body)
    }
}
