//! Error types emitted by the Terrasight CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use terrasight_core::{ConfigError, CoordinateError};
use terrasight_data::SourceBuildError;
use thiserror::Error;

/// Errors emitted by the Terrasight CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Both a place name and explicit coordinates were supplied.
    #[error("--place cannot be combined with --lat/--lng")]
    ConflictingLocation,
    /// The place name is not in the built-in gazetteer.
    #[error("unknown place {name:?} (run `terrasight places` for the list)")]
    UnknownPlace {
        /// Name as supplied.
        name: String,
    },
    /// The supplied coordinates are out of range.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    /// The merged insight settings failed validation.
    #[error("invalid insight configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// Constructing the HTTP sources failed.
    #[error("failed to build data sources for {endpoint:?}: {source}")]
    BuildSources {
        /// Feature query endpoint.
        endpoint: String,
        /// Underlying failure.
        #[source]
        source: SourceBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
