//! Focused unit tests covering insight CLI configuration resolution.

use super::*;
use crate::insight::{InsightArgs, InsightCommandConfig, Location, config_from_layers_for_test};
use rstest::rstest;
use terrasight_core::{ConfigError, CoordinateError, DEFAULT_ENDPOINT, InsightConfig, find_place};

fn args_for_place(name: &str) -> InsightArgs {
    InsightArgs {
        place: Some(name.to_owned()),
        ..InsightArgs::default()
    }
}

#[rstest]
fn converting_place_uses_gazetteer_and_defaults() {
    let config =
        InsightCommandConfig::try_from(args_for_place(" gulshan ")).expect("config should build");

    let gulshan = find_place("Gulshan").expect("known place");
    assert_eq!(config.location, Location::Place(gulshan));
    assert_eq!(config.location.coordinate(), gulshan.coordinate);
    assert_eq!(config.settings, InsightConfig::default());
}

#[rstest]
fn converting_coordinates_applies_overrides() {
    let args = InsightArgs {
        lat: Some(-33.8688),
        lng: Some(151.2093),
        endpoint: Some("https://overpass.example/api/interpreter".to_owned()),
        radius: Some(800.0),
        max_elements: Some(500),
        ndvi_url: Some("https://ndvi.example/p?lat={lat}&lng={lng}".to_owned()),
        ..InsightArgs::default()
    };

    let config = InsightCommandConfig::try_from(args).expect("config should build");

    assert_eq!(config.location.coordinate().lat(), -33.8688);
    assert_eq!(config.location.coordinate().lng(), 151.2093);
    assert_eq!(config.settings.endpoint, "https://overpass.example/api/interpreter");
    assert_eq!(config.settings.radius_m, 800.0);
    assert_eq!(config.settings.max_elements, 500);
    assert_eq!(
        config.settings.ndvi_override_url.as_deref(),
        Some("https://ndvi.example/p?lat={lat}&lng={lng}")
    );
}

#[rstest]
#[case::nothing(None, None, ARG_LAT, ENV_LAT)]
#[case::only_lng(None, Some(90.4), ARG_LAT, ENV_LAT)]
#[case::only_lat(Some(23.8), None, ARG_LNG, ENV_LNG)]
fn converting_without_coordinates_errors(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = InsightArgs {
        lat,
        lng,
        ..InsightArgs::default()
    };
    let err = InsightCommandConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_place_with_coordinates_conflicts() {
    let args = InsightArgs {
        lat: Some(23.8),
        ..args_for_place("Dhaka")
    };
    let err = InsightCommandConfig::try_from(args).expect_err("conflict should error");
    assert!(matches!(err, CliError::ConflictingLocation));
}

#[rstest]
fn converting_out_of_range_latitude_errors() {
    let args = InsightArgs {
        lat: Some(123.0),
        lng: Some(90.0),
        ..InsightArgs::default()
    };
    let err = InsightCommandConfig::try_from(args).expect_err("latitude is out of range");
    match err {
        CliError::InvalidCoordinate(CoordinateError::LatitudeOutOfRange(lat)) => {
            assert_eq!(lat, 123.0);
        }
        other => panic!("expected InvalidCoordinate, found {other:?}"),
    }
}

#[rstest]
#[case::radius(
    InsightArgs { radius: Some(0.0), ..args_for_place("Dhaka") },
    ConfigError::InvalidRadius(0.0)
)]
#[case::cap(
    InsightArgs { max_elements: Some(0), ..args_for_place("Dhaka") },
    ConfigError::ZeroMaxElements
)]
#[case::template(
    InsightArgs { ndvi_url: Some("https://ndvi.example/p".to_owned()), ..args_for_place("Dhaka") },
    ConfigError::MissingPlaceholder { template: "https://ndvi.example/p".to_owned() }
)]
fn converting_invalid_settings_errors(#[case] args: InsightArgs, #[case] expected: ConfigError) {
    let err = InsightCommandConfig::try_from(args).expect_err("settings should be rejected");
    match err {
        CliError::InvalidConfig(actual) => assert_eq!(actual, expected),
        other => panic!("expected InvalidConfig, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "lat": "north" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "endpoint": "https://from-file.example/api/interpreter",
            "radius": 600.0,
            "place": "Mirpur",
        }),
        None,
    );
    composer.push_environment(json!({
        "radius": 900.0,
        "max_elements": 250,
    }));
    composer.push_cli(json!({
        "place": "Uttara",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    let uttara = find_place("Uttara").expect("known place");
    assert_eq!(config.location, Location::Place(uttara));
    assert_eq!(
        config.settings.endpoint,
        "https://from-file.example/api/interpreter"
    );
    assert_eq!(config.settings.radius_m, 900.0);
    assert_eq!(config.settings.max_elements, 250);
    assert_ne!(config.settings.endpoint, DEFAULT_ENDPOINT);
}
