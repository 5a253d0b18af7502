//! Explicit degraded results for best-effort data sources.
//!
//! Source failures never abort an insight computation. Instead each fetch
//! resolves to a [`SourceOutcome`], and degraded outcomes carry a
//! [`DegradedReason`] that is recorded on the final insight.

use serde::{Deserialize, Serialize};

use crate::{OverrideError, QueryError};

/// Why a data source contributed no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegradedReason {
    /// The feature query failed; zero counts were substituted.
    QueryFailure {
        /// Human-readable failure detail.
        message: String,
    },
    /// The vegetation-index override failed; the proxy value was kept.
    OverrideUnavailable {
        /// Human-readable failure detail.
        message: String,
    },
}

impl From<QueryError> for DegradedReason {
    fn from(error: QueryError) -> Self {
        Self::QueryFailure {
            message: error.to_string(),
        }
    }
}

impl From<OverrideError> for DegradedReason {
    fn from(error: OverrideError) -> Self {
        Self::OverrideUnavailable {
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QueryFailure { message } => write!(f, "feature query failed: {message}"),
            Self::OverrideUnavailable { message } => {
                write!(f, "vegetation override unavailable: {message}")
            }
        }
    }
}

/// Result of consulting a best-effort source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome<T> {
    /// The source produced a value.
    Available(T),
    /// The source failed; the caller falls back to a default.
    Degraded(DegradedReason),
}

impl<T> SourceOutcome<T> {
    /// Return the value, or `fallback` after recording the degradation.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::{DegradedReason, SourceOutcome};
    ///
    /// let mut degraded = Vec::new();
    /// let reason = DegradedReason::QueryFailure { message: "HTTP 504".into() };
    /// let value = SourceOutcome::Degraded(reason.clone()).or_record(0_u32, &mut degraded);
    /// assert_eq!(value, 0);
    /// assert_eq!(degraded, vec![reason]);
    /// ```
    pub fn or_record(self, fallback: T, degraded: &mut Vec<DegradedReason>) -> T {
        match self {
            Self::Available(value) => value,
            Self::Degraded(reason) => {
                degraded.push(reason);
                fallback
            }
        }
    }

    /// Report whether the source failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

impl<T, E: Into<DegradedReason>> From<Result<T, E>> for SourceOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Available(value),
            Err(error) => Self::Degraded(error.into()),
        }
    }
}
