//! Deterministic synthetic region details.
//!
//! No authoritative population, greenery or air-quality feed is wired in, so
//! baseline details are derived from a hash of the coordinate. The hash is a
//! pure function of its input: identical coordinates always produce
//! identical details, on every run and every platform with IEEE-754 `sin`.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Raw values produced by [`derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticSample {
    /// Population in `1000..=16000`.
    pub population: u32,
    /// Greenery percentage in `10..=70`.
    pub greenery: u8,
    /// Air-quality index in `40..=240`.
    pub aqi: u32,
}

/// Baseline details exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDetails {
    /// Population density figure (the synthetic population divided by ten).
    pub population: u32,
    /// Greenery percentage in `0..=100`.
    pub greenery: u8,
    /// Air-quality index.
    pub aqi: u32,
}

impl RegionDetails {
    /// Expose a synthetic sample as region details.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::{RegionDetails, SyntheticSample};
    ///
    /// let sample = SyntheticSample { population: 2296, greenery: 15, aqi: 57 };
    /// assert_eq!(RegionDetails::from_sample(sample).population, 230);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "population is exposed as a density, one tenth of the sample"
    )]
    #[must_use]
    pub fn from_sample(sample: SyntheticSample) -> Self {
        Self {
            population: round_to_u32(f64::from(sample.population) / 10.0),
            greenery: sample.greenery.min(100),
            aqi: sample.aqi,
        }
    }
}

/// Uniform pseudo-random value in `0.0..1.0` derived from a coordinate.
///
/// Computes `|sin(lat·12.9898 + lng·78.233)| · 43758.5453` and keeps the
/// fractional part.
#[expect(
    clippy::float_arithmetic,
    reason = "the hash is defined over floating-point trigonometry"
)]
#[must_use]
pub fn coordinate_hash(coordinate: Coordinate) -> f64 {
    let seed = (coordinate.lat() * 12.9898 + coordinate.lng() * 78.233).sin().abs() * 43_758.545_3;
    let fraction = seed - seed.floor();
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Derive synthetic population, greenery and AQI for a coordinate.
///
/// # Examples
/// ```
/// use terrasight_core::{Coordinate, synthetic};
///
/// # fn main() -> Result<(), terrasight_core::CoordinateError> {
/// let dhaka = Coordinate::new(23.8103, 90.4125)?;
/// assert_eq!(synthetic::derive(dhaka), synthetic::derive(dhaka));
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "synthetic values are affine maps of the hash"
)]
#[must_use]
pub fn derive(coordinate: Coordinate) -> SyntheticSample {
    let r = coordinate_hash(coordinate);
    SyntheticSample {
        population: round_to_u32(1_000.0 + r * 15_000.0),
        greenery: round_to_u8(10.0 + r * 60.0),
        aqi: round_to_u32(40.0 + r * 200.0),
    }
}

/// Derive the synthetic baseline exposed in a region insight.
#[must_use]
pub fn details(coordinate: Coordinate) -> RegionDetails {
    RegionDetails::from_sample(derive(coordinate))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "inputs are finite, non-negative and clamped to the u32 range first"
)]
fn round_to_u32(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "inputs are finite, non-negative and clamped to the u8 range first"
)]
fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}
