//! Construction errors for the HTTP adapters.

use terrasight_core::ConfigError;
use thiserror::Error;

/// Errors raised while building an HTTP-backed source.
#[derive(Debug, Error)]
pub enum SourceBuildError {
    /// The insight configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An endpoint or template is not a valid absolute URL.
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        /// Offending URL or template.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Parse `raw` as an absolute URL.
pub(crate) fn parse_url(raw: &str) -> Result<url::Url, SourceBuildError> {
    url::Url::parse(raw).map_err(|source| SourceBuildError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })
}
