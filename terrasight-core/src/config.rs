//! Explicit configuration passed to the pipeline and its sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default Overpass interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
/// Default query radius in metres.
pub const DEFAULT_RADIUS_M: f64 = 1_200.0;
/// Default cap on elements requested and aggregated.
pub const DEFAULT_MAX_ELEMENTS: usize = 3_000;

/// Placeholder substituted with the latitude in override URL templates.
pub const LAT_PLACEHOLDER: &str = "{lat}";
/// Placeholder substituted with the longitude in override URL templates.
pub const LNG_PLACEHOLDER: &str = "{lng}";

/// Settings shared by the insight service and its data sources.
///
/// # Examples
/// ```
/// use terrasight_core::InsightConfig;
///
/// let config = InsightConfig::default()
///     .with_radius_m(800.0)
///     .with_ndvi_override_url("https://ndvi.example/point?lat={lat}&lng={lng}");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_elements, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Feature query service URL.
    pub endpoint: String,
    /// Query radius in metres.
    pub radius_m: f64,
    /// Maximum number of elements requested and aggregated.
    pub max_elements: usize,
    /// Optional vegetation-index URL template with `{lat}`/`{lng}`
    /// placeholders.
    pub ndvi_override_url: Option<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            radius_m: DEFAULT_RADIUS_M,
            max_elements: DEFAULT_MAX_ELEMENTS,
            ndvi_override_url: None,
        }
    }
}

/// Errors returned by [`InsightConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The endpoint was blank.
    #[error("feature query endpoint must not be empty")]
    EmptyEndpoint,
    /// The radius was zero, negative or non-finite.
    #[error("query radius must be a positive number of metres, got {0}")]
    InvalidRadius(f64),
    /// The element cap was zero.
    #[error("maximum element count must be at least one")]
    ZeroMaxElements,
    /// The override template lacked a coordinate placeholder.
    #[error("vegetation override URL {template:?} must contain {{lat}} and {{lng}}")]
    MissingPlaceholder {
        /// Offending template.
        template: String,
    },
}

impl InsightConfig {
    /// Create a configuration targeting `endpoint` with default settings.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the query radius in metres.
    #[must_use]
    pub const fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Set the element cap.
    #[must_use]
    pub const fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Enable the vegetation-index override.
    #[must_use]
    pub fn with_ndvi_override_url(mut self, template: impl Into<String>) -> Self {
        self.ndvi_override_url = Some(template.into());
        self
    }

    /// Check the configuration for values the pipeline cannot use.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius_m));
        }
        if self.max_elements == 0 {
            return Err(ConfigError::ZeroMaxElements);
        }
        if let Some(template) = &self.ndvi_override_url
            && !(template.contains(LAT_PLACEHOLDER) && template.contains(LNG_PLACEHOLDER))
        {
            return Err(ConfigError::MissingPlaceholder {
                template: template.clone(),
            });
        }
        Ok(())
    }
}
