//! Orchestrates the insight pipeline for a single coordinate.
//!
//! The feature query and the optional vegetation override run concurrently
//! on the caller's executor; synthetic details are computed inline. Every
//! call is independent, read-only and safe to abandon mid-flight.

use futures_util::future;
use log::{debug, warn};
use serde::Serialize;

use crate::{
    ConfigError, Coordinate, DegradedReason, FeatureCounts, FeatureSource, FloodIndicator,
    HeatIndicator, InsightConfig, OverrideError, RegionDetails, SourceOutcome,
    VegetationIndexSource, VegetationIndicator, aggregate, normalize, score, synthetic,
};

/// Where the vegetation signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VegetationSource {
    /// Normalised green-feature density.
    Proxy,
    /// Live vegetation-index sample.
    Override,
}

/// Complete insight returned for a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionInsight {
    /// Baseline population, greenery and air-quality details.
    pub details: RegionDetails,
    /// Flood risk.
    pub flood: FloodIndicator,
    /// Heat-island intensity.
    pub heat: HeatIndicator,
    /// Vegetation signal.
    pub vegetation: VegetationIndicator,
    /// Origin of the vegetation signal.
    pub vegetation_source: VegetationSource,
    /// Counts the indicators were computed from.
    pub counts: FeatureCounts,
    /// Sources that failed and were replaced by fallbacks.
    pub degraded: Vec<DegradedReason>,
}

impl RegionInsight {
    /// Report whether every consulted source answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Computes [`RegionInsight`]s from a feature source and an optional
/// vegetation-index source.
pub struct RegionInsightService {
    config: InsightConfig,
    features: Box<dyn FeatureSource>,
    vegetation: Option<Box<dyn VegetationIndexSource>>,
}

impl std::fmt::Debug for RegionInsightService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionInsightService")
            .field("config", &self.config)
            .field("features", &"<dyn FeatureSource>")
            .field(
                "vegetation",
                &self.vegetation.as_ref().map(|_| "<dyn VegetationIndexSource>"),
            )
            .finish()
    }
}

impl RegionInsightService {
    /// Build a service around a feature source.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `config` fails validation.
    pub fn new(
        config: InsightConfig,
        features: impl FeatureSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            features: Box::new(features),
            vegetation: None,
        })
    }

    /// Attach a vegetation-index source used to override the proxy signal.
    #[must_use]
    pub fn with_vegetation_index(mut self, source: impl VegetationIndexSource + 'static) -> Self {
        self.vegetation = Some(Box::new(source));
        self
    }

    /// The configuration the service was built with.
    #[must_use]
    pub const fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Compute the insight for `coordinate`.
    ///
    /// Never fails: source errors are recorded in
    /// [`RegionInsight::degraded`] and replaced by fallbacks (zero counts
    /// for the feature query, the proxy value for the vegetation override).
    pub async fn insight(&self, coordinate: Coordinate) -> RegionInsight {
        debug!("computing insight for {coordinate}");
        let details = synthetic::details(coordinate);
        let (counts_outcome, override_outcome) = future::join(
            self.feature_counts(coordinate),
            self.vegetation_override(coordinate),
        )
        .await;

        let mut degraded = Vec::new();
        let counts = counts_outcome.or_record(FeatureCounts::default(), &mut degraded);
        let vegetation_override =
            override_outcome.and_then(|outcome| outcome.or_record(None, &mut degraded));
        let vegetation_source = if vegetation_override.is_some() {
            VegetationSource::Override
        } else {
            VegetationSource::Proxy
        };

        let normalized = normalize(counts, self.config.radius_m);
        let indicators = score(&normalized, vegetation_override);
        debug!(
            "insight for {coordinate}: {counts:?}, flood {:.3}, heat {:.3}, vegetation {:.3}",
            indicators.flood.score(),
            indicators.heat.score(),
            indicators.vegetation.score()
        );

        RegionInsight {
            details,
            flood: indicators.flood,
            heat: indicators.heat,
            vegetation: indicators.vegetation,
            vegetation_source,
            counts,
            degraded,
        }
    }

    async fn feature_counts(&self, coordinate: Coordinate) -> SourceOutcome<FeatureCounts> {
        match self.features.query(coordinate, self.config.radius_m).await {
            Ok(elements) => {
                debug!("feature query returned {} elements", elements.len());
                SourceOutcome::Available(aggregate(&elements, self.config.max_elements))
            }
            Err(error) => {
                warn!("feature query for {coordinate} failed, using zero counts: {error}");
                SourceOutcome::Degraded(error.into())
            }
        }
    }

    /// `None` when no override source is configured.
    async fn vegetation_override(
        &self,
        coordinate: Coordinate,
    ) -> Option<SourceOutcome<Option<f64>>> {
        let source = self.vegetation.as_ref()?;
        let outcome = match source.sample(coordinate).await {
            Ok(value) if value.is_finite() => SourceOutcome::Available(Some(value)),
            Ok(value) => {
                warn!("vegetation override for {coordinate} returned {value}, keeping proxy");
                SourceOutcome::Degraded(OverrideError::NonFinite.into())
            }
            Err(error) => {
                warn!("vegetation override for {coordinate} unavailable, keeping proxy: {error}");
                SourceOutcome::Degraded(error.into())
            }
        };
        Some(outcome)
    }
}
