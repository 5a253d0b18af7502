//! Insight command implementation for the Terrasight CLI.

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use terrasight_core::{
    Coordinate, InsightConfig, Place, RegionInsight, RegionInsightService, find_place,
};
use terrasight_data::service_from_config;

use crate::{
    ARG_ENDPOINT, ARG_LAT, ARG_LNG, ARG_MAX_ELEMENTS, ARG_NDVI_URL, ARG_PLACE, ARG_RADIUS,
    CliError, ENV_LAT, ENV_LNG, write_json,
};

/// CLI arguments for the `insight` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "insight",
    long_about = "Compute flood, heat and vegetation indicators for a point. \
                 The point comes from --lat/--lng or a gazetteer name via \
                 --place. Query settings can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Compute the insight for a coordinate or a named place"
)]
#[ortho_config(prefix = "TERRASIGHT")]
pub(crate) struct InsightArgs {
    /// Latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Name of a built-in place (see `terrasight places`).
    #[arg(long = ARG_PLACE, value_name = "name")]
    #[serde(default)]
    pub(crate) place: Option<String>,
    /// Overpass interpreter URL.
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// Query radius in metres.
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// Maximum number of elements requested and aggregated.
    #[arg(long = ARG_MAX_ELEMENTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_elements: Option<usize>,
    /// Vegetation-index URL template with `{lat}` and `{lng}` placeholders.
    #[arg(long = ARG_NDVI_URL, value_name = "template")]
    #[serde(default)]
    pub(crate) ndvi_url: Option<String>,
}

impl InsightArgs {
    pub(crate) fn into_config(self) -> Result<InsightCommandConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InsightCommandConfig::try_from(merged)
    }
}

/// Where the insight is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Location {
    /// A gazetteer entry.
    Place(&'static Place),
    /// Explicit coordinates.
    Point(Coordinate),
}

impl Location {
    pub(crate) const fn coordinate(&self) -> Coordinate {
        match self {
            Self::Place(place) => place.coordinate,
            Self::Point(coordinate) => *coordinate,
        }
    }

    const fn name(&self) -> Option<&'static str> {
        match self {
            Self::Place(place) => Some(place.name),
            Self::Point(_) => None,
        }
    }
}

/// Resolved `insight` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InsightCommandConfig {
    pub(crate) location: Location,
    pub(crate) settings: InsightConfig,
}

impl TryFrom<InsightArgs> for InsightCommandConfig {
    type Error = CliError;

    fn try_from(args: InsightArgs) -> Result<Self, Self::Error> {
        let location = resolve_location(args.place.as_deref(), args.lat, args.lng)?;

        let mut settings = InsightConfig::default();
        if let Some(endpoint) = args.endpoint {
            settings.endpoint = endpoint;
        }
        if let Some(radius) = args.radius {
            settings.radius_m = radius;
        }
        if let Some(max_elements) = args.max_elements {
            settings.max_elements = max_elements;
        }
        settings.ndvi_override_url = args.ndvi_url;
        settings.validate()?;

        Ok(Self { location, settings })
    }
}

fn resolve_location(
    place: Option<&str>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Location, CliError> {
    match (place, lat, lng) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CliError::ConflictingLocation),
        (Some(name), None, None) => find_place(name)
            .map(Location::Place)
            .ok_or_else(|| CliError::UnknownPlace {
                name: name.to_owned(),
            }),
        (None, Some(lat), Some(lng)) => Ok(Location::Point(Coordinate::new(lat, lng)?)),
        (None, Some(_), None) => Err(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_LNG,
        }),
        (None, None, _) => Err(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_LAT,
        }),
    }
}

/// Builds the insight service for the current invocation.
pub(crate) trait InsightServiceBuilder {
    fn build(&self, settings: &InsightConfig) -> Result<RegionInsightService, CliError>;
}

pub(crate) struct DefaultInsightServiceBuilder;

impl InsightServiceBuilder for DefaultInsightServiceBuilder {
    fn build(&self, settings: &InsightConfig) -> Result<RegionInsightService, CliError> {
        service_from_config(settings.clone()).map_err(|source| CliError::BuildSources {
            endpoint: settings.endpoint.clone(),
            source,
        })
    }
}

/// JSON document printed by the `insight` command.
#[derive(Debug, Serialize)]
struct InsightReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    place: Option<&'static str>,
    coordinate: Coordinate,
    #[serde(flatten)]
    insight: RegionInsight,
}

pub(crate) fn run_insight(args: InsightArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_insight_with(args, &DefaultInsightServiceBuilder, &mut stdout)
}

pub(crate) fn run_insight_with(
    args: InsightArgs,
    builder: &dyn InsightServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_insight(&config, builder)?;
    write_json(writer, &report)
}

fn execute_insight(
    config: &InsightCommandConfig,
    builder: &dyn InsightServiceBuilder,
) -> Result<InsightReport, CliError> {
    let service = builder.build(&config.settings)?;
    let coordinate = config.location.coordinate();
    debug!("running insight for {coordinate} with {:?}", config.settings);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let insight = runtime.block_on(service.insight(coordinate));

    Ok(InsightReport {
        place: config.location.name(),
        coordinate,
        insight,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<InsightCommandConfig, CliError> {
    let merged = InsightArgs::merge_from_layers(layers).map_err(CliError::from)?;
    InsightCommandConfig::try_from(merged)
}
