//! Facade crate for Terrasight region insights.
//!
//! This crate re-exports the core domain types and exposes the HTTP-backed
//! sources behind the default `http` feature.

#![forbid(unsafe_code)]

pub use terrasight_core::{
    Coordinate, CoordinateError, DegradedReason, FeatureCounts, FeatureSource, FloodLabel,
    HeatLabel, InsightConfig, Place, RegionDetails, RegionInsight, RegionInsightService,
    VegetationIndexSource, VegetationLabel, VegetationSource, find_place, places,
};

#[cfg(feature = "http")]
pub use terrasight_data::{
    HttpVegetationIndexSource, OverpassFeatureSource, SourceBuildError, service_from_config,
};
