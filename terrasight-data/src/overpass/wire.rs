//! Overpass JSON response types.
//!
//! Only the fields the pipeline consumes are modelled; geometry, ids and
//! metadata are ignored during deserialisation.
//!
//! See: <https://wiki.openstreetmap.org/wiki/Overpass_API/Output_Formats#JSON>

use serde::Deserialize;
use terrasight_core::{ElementKind, RawFeatureElement, Tags};

/// Top-level Overpass response.
#[derive(Debug, Deserialize)]
pub(crate) struct OverpassResponse {
    /// Returned elements; absent when the query matched nothing.
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A single element in the `elements` array.
#[derive(Debug, Deserialize)]
pub(crate) struct OverpassElement {
    /// Wire kind: `node`, `way` or `relation`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Element tags, omitted by Overpass for untagged elements.
    #[serde(default)]
    pub tags: Option<Tags>,
}

impl OverpassResponse {
    /// Convert into domain elements, skipping unsupported kinds and keeping
    /// at most `cap` elements.
    pub(crate) fn into_elements(self, cap: usize) -> Vec<RawFeatureElement> {
        self.elements
            .into_iter()
            .filter_map(|element| {
                ElementKind::from_wire(&element.kind)
                    .map(|kind| RawFeatureElement::new(kind, element.tags.unwrap_or_default()))
            })
            .take(cap)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialise_elements_with_and_without_tags() {
        let json = r#"{
            "version": 0.6,
            "elements": [
                {"type": "way", "id": 1, "center": {"lat": 23.8, "lon": 90.4},
                 "tags": {"building": "yes"}},
                {"type": "node", "id": 2, "lat": 23.8, "lon": 90.4}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).expect("should deserialise");
        let elements = response.into_elements(10);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].kind, ElementKind::Way);
        assert_eq!(elements[0].tag("building"), Some("yes"));
        assert_eq!(elements[1].kind, ElementKind::Node);
        assert!(elements[1].tags.is_empty());
    }

    #[rstest]
    fn missing_elements_array_is_empty() {
        let response: OverpassResponse =
            serde_json::from_str(r#"{"remark": "runtime error"}"#).expect("should deserialise");
        assert!(response.into_elements(10).is_empty());
    }

    #[rstest]
    fn skips_relations_before_capping() {
        let json = r#"{"elements": [
            {"type": "relation", "tags": {"natural": "water"}},
            {"type": "way", "tags": {"natural": "water"}},
            {"type": "way", "tags": {"leisure": "park"}},
            {"type": "node", "tags": {"waterway": "drain"}}
        ]}"#;

        let response: OverpassResponse = serde_json::from_str(json).expect("should deserialise");
        let elements = response.into_elements(2);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].tag("natural"), Some("water"));
        assert_eq!(elements[1].tag("leisure"), Some("park"));
    }

    #[rstest]
    fn rejects_non_string_tag_values() {
        let json = r#"{"elements": [{"type": "way", "tags": {"levels": 3}}]}"#;
        assert!(serde_json::from_str::<OverpassResponse>(json).is_err());
    }
}
