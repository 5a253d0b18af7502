//! Command-line interface for Terrasight region insights.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod error;
mod insight;
mod places;

pub use error::CliError;

use insight::InsightArgs;

const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_PLACE: &str = "place";
const ARG_ENDPOINT: &str = "endpoint";
const ARG_RADIUS: &str = "radius";
const ARG_MAX_ELEMENTS: &str = "max-elements";
const ARG_NDVI_URL: &str = "ndvi-url";
const ENV_LAT: &str = "TERRASIGHT_CMDS_INSIGHT_LAT";
const ENV_LNG: &str = "TERRASIGHT_CMDS_INSIGHT_LNG";

/// Run the Terrasight CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Insight(args) => insight::run_insight(args),
        Command::Places => places::run_places(),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "terrasight",
    about = "Flood, heat and vegetation insights for any coordinate",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the insight for a coordinate or a named place.
    Insight(InsightArgs),
    /// List the built-in places accepted by `insight --place`.
    Places,
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
