//! Closure-backed sources for behaviour tests.

use async_trait::async_trait;
use terrasight_core::{
    Coordinate, FeatureSource, OverrideError, QueryError, RawFeatureElement,
    VegetationIndexSource,
};

/// Feature source answering every query from a closure.
pub struct FnFeatureSource<F>(pub F);

#[async_trait]
impl<F> FeatureSource for FnFeatureSource<F>
where
    F: Fn(Coordinate, f64) -> Result<Vec<RawFeatureElement>, QueryError> + Send + Sync,
{
    async fn query(
        &self,
        coordinate: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<RawFeatureElement>, QueryError> {
        (self.0)(coordinate, radius_m)
    }
}

/// Vegetation-index source answering every sample from a closure.
pub struct FnVegetationIndex<F>(pub F);

#[async_trait]
impl<F> VegetationIndexSource for FnVegetationIndex<F>
where
    F: Fn(Coordinate) -> Result<f64, OverrideError> + Send + Sync,
{
    async fn sample(&self, coordinate: Coordinate) -> Result<f64, OverrideError> {
        (self.0)(coordinate)
    }
}
