//! Validated WGS84 coordinates.

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic point supplied by callers.
///
/// Backed by a [`geo::Coord`] with `x = longitude` and `y = latitude`, the
/// same convention used for feature locations elsewhere in the geo stack.
/// Serialises as `{ "lat": .., "lng": .. }`.
///
/// # Examples
/// ```
/// use terrasight_core::Coordinate;
///
/// # fn main() -> Result<(), terrasight_core::CoordinateError> {
/// let gulshan = Coordinate::new(23.7925, 90.4078)?;
/// assert_eq!(gulshan.lat(), 23.7925);
/// assert_eq!(gulshan.lng(), 90.4078);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "LatLng", try_from = "LatLng")]
pub struct Coordinate {
    inner: Coord<f64>,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate components must be finite")]
    NonFinite,
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validate and construct a coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self::from_valid(lat, lng))
    }

    /// Build a coordinate from components already known to be in range.
    pub(crate) const fn from_valid(lat: f64, lng: f64) -> Self {
        Self {
            inner: Coord { x: lng, y: lat },
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.inner.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.inner.x
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        value.inner
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lng())
    }
}

/// Wire form of a [`Coordinate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<Coordinate> for LatLng {
    fn from(value: Coordinate) -> Self {
        Self {
            lat: value.lat(),
            lng: value.lng(),
        }
    }
}

impl TryFrom<LatLng> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}
