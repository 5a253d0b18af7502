//! Core domain types and scoring pipeline for Terrasight.
//!
//! Given a [`Coordinate`], the pipeline queries a [`FeatureSource`] for
//! tagged elements nearby, [`aggregate`]s them into building, water and green
//! counts, [`normalize`]s those counts into densities, and [`score`]s the
//! densities into flood, heat and vegetation indicators. Baseline details
//! come from the deterministic [`synthetic`] generator.
//!
//! [`RegionInsightService`] ties the stages together. It never fails: when a
//! source is unavailable the pipeline degrades to fallbacks and records a
//! [`DegradedReason`] on the returned [`RegionInsight`].
//!
//! # Examples
//!
//! ```
//! use terrasight_core::{
//!     FeatureCounts, FloodLabel, HeatLabel, VegetationLabel, normalize, score,
//! };
//!
//! let normalized = normalize(FeatureCounts::default(), 1_200.0);
//! let indicators = score(&normalized, None);
//! assert_eq!(indicators.flood.label(), FloodLabel::Moderate);
//! assert_eq!(indicators.heat.label(), HeatLabel::Warm);
//! assert_eq!(indicators.vegetation.label(), VegetationLabel::Low);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod coordinate;
mod density;
mod feature;
mod indicator;
mod outcome;
mod places;
mod service;
mod source;
pub mod synthetic;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{
    ConfigError, DEFAULT_ENDPOINT, DEFAULT_MAX_ELEMENTS, DEFAULT_RADIUS_M, InsightConfig,
    LAT_PLACEHOLDER, LNG_PLACEHOLDER,
};
pub use coordinate::{Coordinate, CoordinateError};
pub use density::{
    AreaDensities, DensityBounds, NormalizedDensities, densities, normalize, query_area_km2,
};
pub use feature::{ElementKind, FeatureCounts, RawFeatureElement, Tags, aggregate};
pub use indicator::{
    CompositeIndicator, FloodIndicator, FloodLabel, HeatIndicator, HeatLabel, IndicatorLabel,
    Indicators, VegetationIndicator, VegetationLabel, band, flood_score, heat_score,
    sanitise_score, score,
};
pub use outcome::{DegradedReason, SourceOutcome};
pub use places::{Place, PlaceKind, find_place, places};
pub use service::{RegionInsight, RegionInsightService, VegetationSource};
pub use source::{FeatureSource, OverrideError, QueryError, VegetationIndexSource};
pub use synthetic::{RegionDetails, SyntheticSample};
