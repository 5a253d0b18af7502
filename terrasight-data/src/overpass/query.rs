//! Overpass QL generation.

use terrasight_core::Coordinate;

/// Server-side timeout hint embedded in every query, in seconds.
pub const QUERY_TIMEOUT_SECS: u64 = 25;

/// Tag selectors requested around the query point.
const SELECTORS: [(&str, &str); 7] = [
    ("way", r#"["building"]"#),
    ("node", r#"["waterway"]"#),
    ("way", r#"["waterway"]"#),
    ("way", r#"["natural"="water"]"#),
    ("way", r#"["leisure"="park"]"#),
    ("way", r#"["landuse"~"forest|grass"]"#),
    ("way", r#"["natural"~"wood"]"#),
];

/// Build the Overpass QL union used to count features around `coordinate`.
///
/// Output is limited to tags (plus element centres) and at most `cap`
/// elements.
///
/// # Examples
/// ```
/// use terrasight_core::Coordinate;
/// use terrasight_data::build_query;
///
/// let query = build_query(Coordinate::new(23.8103, 90.4125)?, 1_200.0, 3_000);
/// assert!(query.starts_with("[out:json][timeout:25];"));
/// assert!(query.contains(r#"way["building"](around:1200,23.8103,90.4125);"#));
/// assert!(query.ends_with("out tags center 3000;"));
/// # Ok::<(), terrasight_core::CoordinateError>(())
/// ```
#[must_use]
pub fn build_query(coordinate: Coordinate, radius_m: f64, cap: usize) -> String {
    let around = format!(
        "(around:{radius_m},{},{})",
        coordinate.lat(),
        coordinate.lng()
    );
    let body: String = SELECTORS
        .iter()
        .map(|(kind, filter)| format!("  {kind}{filter}{around};\n"))
        .collect();
    format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n{body});\nout tags center {cap};")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dhaka() -> Coordinate {
        Coordinate::new(23.8103, 90.4125).expect("valid coordinate")
    }

    #[rstest]
    fn requests_every_feature_group() {
        let query = build_query(dhaka(), 1_200.0, 3_000);
        let expected = "[out:json][timeout:25];\n(\n\
            \x20 way[\"building\"](around:1200,23.8103,90.4125);\n\
            \x20 node[\"waterway\"](around:1200,23.8103,90.4125);\n\
            \x20 way[\"waterway\"](around:1200,23.8103,90.4125);\n\
            \x20 way[\"natural\"=\"water\"](around:1200,23.8103,90.4125);\n\
            \x20 way[\"leisure\"=\"park\"](around:1200,23.8103,90.4125);\n\
            \x20 way[\"landuse\"~\"forest|grass\"](around:1200,23.8103,90.4125);\n\
            \x20 way[\"natural\"~\"wood\"](around:1200,23.8103,90.4125);\n\
            );\nout tags center 3000;";
        assert_eq!(query, expected);
    }

    #[rstest]
    #[case(850.5, 10, "(around:850.5,", "out tags center 10;")]
    #[case(1_000.0, 1, "(around:1000,", "out tags center 1;")]
    fn embeds_radius_and_cap(
        #[case] radius_m: f64,
        #[case] cap: usize,
        #[case] around: &str,
        #[case] output: &str,
    ) {
        let query = build_query(dhaka(), radius_m, cap);
        assert_eq!(query.matches(around).count(), 7);
        assert!(query.ends_with(output), "unexpected tail in {query}");
    }

    #[rstest]
    fn keeps_negative_coordinates() {
        let sydney = Coordinate::new(-33.8688, 151.2093).expect("valid coordinate");
        let query = build_query(sydney, 500.0, 5);
        assert!(query.contains("(around:500,-33.8688,151.2093);"));
    }
}
