//! Asynchronous data sources consulted by the insight pipeline.
//!
//! [`FeatureSource`] fetches tagged elements around a point and
//! [`VegetationIndexSource`] samples a live vegetation index. Both make at
//! most one attempt per call; the pipeline treats every failure as missing
//! data rather than propagating it.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Coordinate, RawFeatureElement};

/// Errors from [`FeatureSource::query`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The request exceeded its timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body was not the expected JSON document.
    #[error("failed to parse feature response: {message}")]
    Parse {
        /// Error detail.
        message: String,
    },
}

/// Errors from [`VegetationIndexSource::sample`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The request failed before a usable response arrived.
    #[error("vegetation index request to {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response did not contain a numeric `ndvi` field.
    #[error("vegetation index response was malformed: {message}")]
    Malformed {
        /// Error detail.
        message: String,
    },
    /// The reported index was NaN or infinite.
    #[error("vegetation index was not a finite number")]
    NonFinite,
}

/// Fetch tagged geographic elements around a coordinate.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use terrasight_core::{Coordinate, FeatureSource, QueryError, RawFeatureElement};
///
/// struct EmptySource;
///
/// #[async_trait]
/// impl FeatureSource for EmptySource {
///     async fn query(
///         &self,
///         _coordinate: Coordinate,
///         _radius_m: f64,
///     ) -> Result<Vec<RawFeatureElement>, QueryError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Return elements within `radius_m` metres of `coordinate`.
    async fn query(
        &self,
        coordinate: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<RawFeatureElement>, QueryError>;
}

/// Sample a live vegetation index (such as NDVI) at a point.
#[async_trait]
pub trait VegetationIndexSource: Send + Sync {
    /// Return the vegetation index at `coordinate`.
    ///
    /// Values outside `0.0..=1.0` are accepted here and clamped by the
    /// scorer.
    async fn sample(&self, coordinate: Coordinate) -> Result<f64, OverrideError>;
}
