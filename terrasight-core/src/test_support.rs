//! Deterministic source doubles used by unit and behaviour tests.
//!
//! The stubs return pre-configured responses without making network calls,
//! so the degraded paths of the pipeline can be exercised directly.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    Coordinate, FeatureSource, OverrideError, QueryError, RawFeatureElement,
    VegetationIndexSource,
};

/// Stub [`FeatureSource`] returning fixed elements or a fixed error.
///
/// Clones share one call counter, so a test can hand a clone to a service
/// and inspect [`StubFeatureSource::calls`] afterwards.
#[derive(Debug, Clone)]
pub struct StubFeatureSource {
    response: Result<Vec<RawFeatureElement>, QueryError>,
    calls: Arc<AtomicUsize>,
}

impl StubFeatureSource {
    /// Create a source returning no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_elements(Vec::new())
    }

    /// Create a source returning `elements` on every call.
    #[must_use]
    pub fn with_elements(elements: Vec<RawFeatureElement>) -> Self {
        Self {
            response: Ok(elements),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a source failing with `error` on every call.
    #[must_use]
    pub fn with_error(error: QueryError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of queries issued so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeatureSource for StubFeatureSource {
    async fn query(
        &self,
        _coordinate: Coordinate,
        _radius_m: f64,
    ) -> Result<Vec<RawFeatureElement>, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Stub [`VegetationIndexSource`] returning a fixed value or error.
#[derive(Debug, Clone)]
pub struct StubVegetationIndexSource {
    response: Result<f64, OverrideError>,
}

impl StubVegetationIndexSource {
    /// Create a source reporting `value` for every coordinate.
    #[must_use]
    pub const fn with_value(value: f64) -> Self {
        Self { response: Ok(value) }
    }

    /// Create a source failing with `error` for every coordinate.
    #[must_use]
    pub const fn with_error(error: OverrideError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[async_trait]
impl VegetationIndexSource for StubVegetationIndexSource {
    async fn sample(&self, _coordinate: Coordinate) -> Result<f64, OverrideError> {
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;
    use rstest::rstest;

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0).expect("valid coordinate")
    }

    #[rstest]
    #[tokio::test]
    async fn feature_stub_counts_calls() {
        let source = StubFeatureSource::with_elements(vec![RawFeatureElement::with_tags(
            ElementKind::Node,
            [("waterway", "drain")],
        )]);

        let first = source.query(origin(), 1_200.0).await.expect("stub succeeds");
        let second = source.query(origin(), 1_200.0).await.expect("stub succeeds");

        assert_eq!(first, second);
        assert_eq!(source.calls(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn feature_stub_clones_share_call_count() {
        let source = StubFeatureSource::empty();
        let handle = source.clone();

        source.query(origin(), 1_200.0).await.expect("stub succeeds");

        assert_eq!(handle.calls(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn vegetation_stub_returns_configured_error() {
        let source = StubVegetationIndexSource::with_error(OverrideError::NonFinite);
        let err = source.sample(origin()).await.expect_err("stub fails");
        assert_eq!(err, OverrideError::NonFinite);
    }
}
