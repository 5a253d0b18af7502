//! Places command: prints the built-in gazetteer.

use std::io::Write;

use terrasight_core::{Place, places};

use crate::{CliError, write_json};

pub(crate) fn run_places() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_places_with(&mut stdout)
}

pub(crate) fn run_places_with(writer: &mut dyn Write) -> Result<(), CliError> {
    let listing: Vec<&Place> = places().collect();
    write_json(writer, &listing)
}
