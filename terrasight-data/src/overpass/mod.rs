//! Overpass API adapter implementing [`terrasight_core::FeatureSource`].
//!
//! [`OverpassFeatureSource`] POSTs an Overpass QL query (see
//! [`build_query`]) as the form field `data` and converts the JSON
//! `elements` array into [`terrasight_core::RawFeatureElement`]s.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use terrasight_core::{Coordinate, FeatureSource};
//! use terrasight_data::overpass::{OverpassConfig, OverpassFeatureSource};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OverpassConfig::new("https://overpass.kumi.systems/api/interpreter")
//!     .with_timeout(Duration::from_secs(40))
//!     .with_max_elements(500);
//! let source = OverpassFeatureSource::with_config(config)?;
//! let elements = source.query(Coordinate::new(23.8103, 90.4125)?, 1_200.0).await?;
//! println!("{} elements", elements.len());
//! # Ok(())
//! # }
//! ```

mod query;
mod source;
mod wire;

pub use query::{QUERY_TIMEOUT_SECS, build_query};
pub use source::{OverpassConfig, OverpassFeatureSource};
