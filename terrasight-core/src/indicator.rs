//! Composite indicators derived from normalised densities.
//!
//! Flood risk and heat-island intensity are weighted blends of the
//! normalised densities, each labelled with a four-tier scale split at
//! 0.25, 0.5 and 0.75. The vegetation signal uses a two-threshold scale
//! (0.35 and 0.6) with three labels.

use serde::{Serialize, Serializer};

use crate::NormalizedDensities;

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use terrasight_core::sanitise_score;
///
/// assert_eq!(sanitise_score(1.7), 1.0);
/// assert_eq!(sanitise_score(f64::NAN), 0.0);
/// ```
#[must_use]
pub const fn sanitise_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Four-tier band index for a score: `<0.25 → 0`, `<0.5 → 1`, `<0.75 → 2`,
/// otherwise `3`.
#[must_use]
pub const fn band(score: f64) -> u8 {
    if score < 0.25 {
        0
    } else if score < 0.5 {
        1
    } else if score < 0.75 {
        2
    } else {
        3
    }
}

/// A discrete, human-readable category for an indicator score.
pub trait IndicatorLabel: Copy + std::fmt::Debug + PartialEq {
    /// Map a sanitised score to its label.
    fn from_score(score: f64) -> Self;

    /// Display text for the label.
    fn as_str(&self) -> &'static str;
}

/// Flood-risk categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloodLabel {
    /// Score below 0.25.
    Low,
    /// Score in `0.25..0.5`.
    Moderate,
    /// Score in `0.5..0.75`.
    High,
    /// Score of 0.75 or more.
    Severe,
}

impl IndicatorLabel for FloodLabel {
    fn from_score(score: f64) -> Self {
        match band(score) {
            0 => Self::Low,
            1 => Self::Moderate,
            2 => Self::High,
            _ => Self::Severe,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }
}

/// Heat-island categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatLabel {
    /// Score below 0.25.
    Mild,
    /// Score in `0.25..0.5`.
    Warm,
    /// Score in `0.5..0.75`.
    Hot,
    /// Score of 0.75 or more.
    Hottest,
}

impl IndicatorLabel for HeatLabel {
    fn from_score(score: f64) -> Self {
        match band(score) {
            0 => Self::Mild,
            1 => Self::Warm,
            2 => Self::Hot,
            _ => Self::Hottest,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
            Self::Hottest => "Hottest",
        }
    }
}

/// Vegetation-signal categories.
///
/// Unlike flood and heat this is a three-label scale split at 0.35 and 0.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegetationLabel {
    /// Score below 0.35; displayed as `Low (tree loss risk)`.
    Low,
    /// Score in `0.35..0.6`.
    Moderate,
    /// Score of 0.6 or more.
    High,
}

impl IndicatorLabel for VegetationLabel {
    fn from_score(score: f64) -> Self {
        if score < 0.35 {
            Self::Low
        } else if score < 0.6 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low (tree loss risk)",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

macro_rules! impl_label_display {
    ($($label:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $label {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl Serialize for $label {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }
        )+
    };
}

impl_label_display!(FloodLabel, HeatLabel, VegetationLabel);

/// A score in `0.0..=1.0` paired with its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeIndicator<L> {
    score: f64,
    label: L,
}

impl<L: IndicatorLabel> CompositeIndicator<L> {
    /// Sanitise `score` and derive its label.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::{CompositeIndicator, FloodLabel};
    ///
    /// let flood = CompositeIndicator::<FloodLabel>::from_score(0.25);
    /// assert_eq!(flood.label(), FloodLabel::Moderate);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let sanitised = sanitise_score(score);
        Self {
            score: sanitised,
            label: L::from_score(sanitised),
        }
    }

    /// The sanitised score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// The label derived from the score.
    #[must_use]
    pub fn label(&self) -> L {
        self.label
    }
}

/// Flood-risk indicator.
pub type FloodIndicator = CompositeIndicator<FloodLabel>;
/// Heat-island indicator.
pub type HeatIndicator = CompositeIndicator<HeatLabel>;
/// Vegetation-signal indicator.
pub type VegetationIndicator = CompositeIndicator<VegetationLabel>;

/// The three indicators computed for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicators {
    /// Flood risk.
    pub flood: FloodIndicator,
    /// Heat-island intensity.
    pub heat: HeatIndicator,
    /// Vegetation signal.
    pub vegetation: VegetationIndicator,
}

/// Flood risk rises with nearby water and falls with greenery.
#[expect(
    clippy::float_arithmetic,
    reason = "weighted blend of normalised densities"
)]
#[must_use]
pub fn flood_score(normalized: &NormalizedDensities) -> f64 {
    (0.6 * normalized.water + 0.4 * (1.0 - normalized.green)).min(1.0)
}

/// Heat rises with built density and falls with greenery.
#[expect(
    clippy::float_arithmetic,
    reason = "weighted blend of normalised densities"
)]
#[must_use]
pub fn heat_score(normalized: &NormalizedDensities) -> f64 {
    (0.7 * normalized.building + 0.3 * (1.0 - normalized.green)).min(1.0)
}

/// Combine normalised densities into indicators.
///
/// The vegetation signal is the normalised green density unless `override`
/// supplies a live vegetation index, which is clamped to `0.0..=1.0`.
///
/// # Examples
/// ```
/// use terrasight_core::{FloodLabel, HeatLabel, NormalizedDensities, VegetationLabel, score};
///
/// let indicators = score(&NormalizedDensities::default(), None);
/// assert_eq!(indicators.flood.label(), FloodLabel::Moderate);
/// assert_eq!(indicators.heat.label(), HeatLabel::Warm);
/// assert_eq!(indicators.vegetation.label(), VegetationLabel::Low);
/// ```
#[must_use]
pub fn score(normalized: &NormalizedDensities, vegetation_override: Option<f64>) -> Indicators {
    let vegetation = vegetation_override.map_or(normalized.green, sanitise_score);
    Indicators {
        flood: CompositeIndicator::from_score(flood_score(normalized)),
        heat: CompositeIndicator::from_score(heat_score(normalized)),
        vegetation: CompositeIndicator::from_score(vegetation),
    }
}
