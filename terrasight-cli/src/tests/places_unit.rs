//! Unit tests for the `places` command output.

use crate::places::run_places_with;
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn lists_every_place_as_json() {
    let mut buffer = Vec::new();
    run_places_with(&mut buffer).expect("listing should succeed");

    let output: Value = serde_json::from_slice(&buffer).expect("output should be JSON");
    let entries = output.as_array().expect("output should be an array");
    assert_eq!(entries.len(), 46);
    assert_eq!(entries[0]["name"], "Dhaka");
    assert_eq!(entries[0]["kind"], "division");
    assert_eq!(entries[0]["coordinate"]["lat"], 23.8103);
    assert_eq!(entries[8]["kind"], "region");
}

#[rstest]
fn output_ends_with_newline() {
    let mut buffer = Vec::new();
    run_places_with(&mut buffer).expect("listing should succeed");
    assert_eq!(buffer.last(), Some(&b'\n'));
}
