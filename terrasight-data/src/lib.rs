//! HTTP adapters feeding the Terrasight insight pipeline.
//!
//! Responsibilities:
//! - Query an Overpass interpreter for tagged elements around a point.
//! - Sample an optional vegetation-index point service.
//! - Assemble a [`RegionInsightService`] from an [`InsightConfig`].
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `terrasight-core`).
//! - One attempt per call; retries and caching are left to callers.
//!
//! Invariants:
//! - Each adapter owns a single `reqwest::Client` reused across calls.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod error;
pub mod overpass;
pub mod vegetation;

use log::debug;
use terrasight_core::{InsightConfig, RegionInsightService};

pub use error::SourceBuildError;
pub use overpass::{OverpassConfig, OverpassFeatureSource, build_query};
pub use vegetation::{HttpVegetationIndexSource, VegetationIndexConfig};

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("terrasight/", env!("CARGO_PKG_VERSION"));

/// Build a service backed by the HTTP adapters described by `config`.
///
/// The vegetation-index override is attached only when
/// [`InsightConfig::ndvi_override_url`] is set.
///
/// # Errors
/// Returns [`SourceBuildError`] when the configuration is invalid, a URL
/// cannot be parsed or an HTTP client fails to build.
///
/// # Examples
/// ```no_run
/// use terrasight_core::{Coordinate, InsightConfig};
/// use terrasight_data::service_from_config;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let service = service_from_config(InsightConfig::default())?;
/// let insight = service.insight(Coordinate::new(23.8103, 90.4125)?).await;
/// println!("flood risk: {}", insight.flood.label());
/// # Ok(())
/// # }
/// ```
pub fn service_from_config(
    config: InsightConfig,
) -> Result<RegionInsightService, SourceBuildError> {
    config.validate()?;
    let features = OverpassFeatureSource::with_config(
        OverpassConfig::new(config.endpoint.clone()).with_max_elements(config.max_elements),
    )?;
    let vegetation = config
        .ndvi_override_url
        .as_deref()
        .map(|template| {
            HttpVegetationIndexSource::with_config(VegetationIndexConfig::new(template))
        })
        .transpose()?;

    debug!(
        "building insight service for {} (override {})",
        config.endpoint,
        if vegetation.is_some() { "enabled" } else { "disabled" }
    );
    let service = RegionInsightService::new(config, features)?;
    Ok(match vegetation {
        Some(source) => service.with_vegetation_index(source),
        None => service,
    })
}
