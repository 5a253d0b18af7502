//! Convert feature counts into normalised spatial densities.
//!
//! Counts are divided by the area of the circular query footprint to give
//! features per km², then each density is min-max scaled into `0.0..=1.0`
//! against fixed heuristic bounds.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::FeatureCounts;

/// Inclusive heuristic range used to scale a density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBounds {
    min: f64,
    max: f64,
}

impl DensityBounds {
    /// Buildings per km²: sparse at 50, dense at 800.
    pub const BUILDINGS: Self = Self::new(50.0, 800.0);
    /// Green features per km²: scarce at 2, lush at 60.
    pub const GREEN: Self = Self::new(2.0, 60.0);
    /// Water features per km²: rare at 0.5, plentiful at 20.
    pub const WATER: Self = Self::new(0.5, 20.0);

    /// `min` must be strictly below `max`; all bounds are fixed constants.
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound, mapped to `0.0`.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, mapped to `1.0`.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Scale `value` into `0.0..=1.0`, clamping values outside the bounds.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::DensityBounds;
    ///
    /// assert_eq!(DensityBounds::GREEN.scale(31.0), 0.5);
    /// assert_eq!(DensityBounds::GREEN.scale(0.0), 0.0);
    /// assert_eq!(DensityBounds::GREEN.scale(1_000.0), 1.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling is inherently floating-point"
    )]
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Feature counts per km².
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaDensities {
    /// Buildings per km².
    pub building_density: f64,
    /// Green features per km².
    pub green_density: f64,
    /// Water features per km².
    pub water_density: f64,
}

/// Densities scaled into `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDensities {
    /// Scaled building density.
    pub building: f64,
    /// Scaled green density.
    pub green: f64,
    /// Scaled water density.
    pub water: f64,
}

/// Area in km² of a circle with the given radius in metres.
///
/// # Examples
/// ```
/// use terrasight_core::query_area_km2;
///
/// let area = query_area_km2(1_200.0);
/// assert!((area - 4.5239).abs() < 1e-4);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "circle area requires floating-point maths"
)]
#[must_use]
pub fn query_area_km2(radius_m: f64) -> f64 {
    let radius_km = radius_m / 1_000.0;
    PI * radius_km * radius_km
}

/// Divide counts by the query footprint.
///
/// A degenerate radius yields zero densities rather than infinities.
#[expect(
    clippy::float_arithmetic,
    reason = "densities are counts divided by an area"
)]
#[must_use]
pub fn densities(counts: FeatureCounts, radius_m: f64) -> AreaDensities {
    let area = query_area_km2(radius_m);
    if !area.is_finite() || area <= 0.0 {
        return AreaDensities::default();
    }
    AreaDensities {
        building_density: f64::from(counts.buildings) / area,
        green_density: f64::from(counts.green) / area,
        water_density: f64::from(counts.water) / area,
    }
}

/// Convert counts into normalised densities for a query of `radius_m` metres.
///
/// # Examples
/// ```
/// use terrasight_core::{FeatureCounts, NormalizedDensities, normalize};
///
/// let normalized = normalize(FeatureCounts::default(), 1_200.0);
/// assert_eq!(normalized, NormalizedDensities::default());
/// ```
#[must_use]
pub fn normalize(counts: FeatureCounts, radius_m: f64) -> NormalizedDensities {
    let area = densities(counts, radius_m);
    NormalizedDensities {
        building: DensityBounds::BUILDINGS.scale(area.building_density),
        green: DensityBounds::GREEN.scale(area.green_density),
        water: DensityBounds::WATER.scale(area.water_density),
    }
}
