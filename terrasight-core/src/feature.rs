//! Raw tagged elements and their aggregation into feature buckets.
//!
//! Elements arrive from a [`FeatureSource`](crate::FeatureSource) carrying
//! OpenStreetMap-style tags. [`aggregate`] classifies a bounded prefix of them
//! into building, water and green counts. The buckets are independent
//! predicates rather than a partition, so one element may count towards more
//! than one bucket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Free-form key/value tags attached to an element.
pub type Tags = HashMap<String, String>;

/// Geometry kind of a raw element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A single point.
    Node,
    /// An ordered list of nodes (lines and areas).
    Way,
}

impl ElementKind {
    /// Parse the wire name used by feature services.
    ///
    /// Returns `None` for kinds the pipeline does not consume, such as
    /// relations.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::ElementKind;
    ///
    /// assert_eq!(ElementKind::from_wire("way"), Some(ElementKind::Way));
    /// assert_eq!(ElementKind::from_wire("relation"), None);
    /// ```
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "node" => Some(Self::Node),
            "way" => Some(Self::Way),
            _ => None,
        }
    }
}

/// A tagged element returned by the feature service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFeatureElement {
    /// Geometry kind.
    pub kind: ElementKind,
    /// Element tags; empty when the service returned none.
    pub tags: Tags,
}

impl RawFeatureElement {
    /// Construct an element from a kind and tags.
    #[must_use]
    pub const fn new(kind: ElementKind, tags: Tags) -> Self {
        Self { kind, tags }
    }

    /// Construct an element from borrowed tag pairs.
    ///
    /// # Examples
    /// ```
    /// use terrasight_core::{ElementKind, RawFeatureElement};
    ///
    /// let park = RawFeatureElement::with_tags(ElementKind::Way, [("leisure", "park")]);
    /// assert_eq!(park.tag("leisure"), Some("park"));
    /// ```
    #[must_use]
    pub fn with_tags<'a, T>(kind: ElementKind, tags: T) -> Self
    where
        T: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let collected = tags
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        Self::new(kind, collected)
    }

    /// Look up a tag value.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Feature counts over a bounded result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCounts {
    /// Building ways.
    pub buildings: u32,
    /// Waterways and water bodies.
    pub water: u32,
    /// Parks, forest or grass landuse, and woods.
    pub green: u32,
}

impl FeatureCounts {
    /// Construct counts directly.
    #[must_use]
    pub const fn new(buildings: u32, water: u32, green: u32) -> Self {
        Self {
            buildings,
            water,
            green,
        }
    }
}

/// Classify and count up to `cap` elements.
///
/// Only the first `cap` elements are considered, so aggregation cost stays
/// bounded regardless of how much the upstream service returns. Elements
/// matching none of the predicates are ignored.
///
/// # Examples
/// ```
/// use terrasight_core::{ElementKind, FeatureCounts, RawFeatureElement, aggregate};
///
/// let elements = [
///     RawFeatureElement::with_tags(ElementKind::Way, [("building", "yes")]),
///     RawFeatureElement::with_tags(ElementKind::Node, [("waterway", "stream")]),
///     RawFeatureElement::with_tags(ElementKind::Way, [("natural", "wood")]),
/// ];
/// assert_eq!(aggregate(&elements, 3000), FeatureCounts::new(1, 1, 1));
/// assert_eq!(aggregate(&elements, 1), FeatureCounts::new(1, 0, 0));
/// ```
#[must_use]
pub fn aggregate(elements: &[RawFeatureElement], cap: usize) -> FeatureCounts {
    elements
        .iter()
        .take(cap)
        .filter(|element| !element.tags.is_empty())
        .fold(FeatureCounts::default(), |mut counts, element| {
            if is_building(element) {
                counts.buildings = counts.buildings.saturating_add(1);
            }
            if is_water(element) {
                counts.water = counts.water.saturating_add(1);
            }
            if is_green(element) {
                counts.green = counts.green.saturating_add(1);
            }
            counts
        })
}

/// Buildings are only requested as ways, so building nodes are not counted.
fn is_building(element: &RawFeatureElement) -> bool {
    element.kind == ElementKind::Way && element.tags.contains_key("building")
}

fn is_water(element: &RawFeatureElement) -> bool {
    element.tags.contains_key("waterway") || element.tag("natural") == Some("water")
}

fn is_green(element: &RawFeatureElement) -> bool {
    element.tag("leisure") == Some("park")
        || element.tag("landuse").is_some_and(is_vegetated_landuse)
        || element.tag("natural") == Some("wood")
}

fn is_vegetated_landuse(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    lowered.contains("forest") || lowered.contains("grass")
}
