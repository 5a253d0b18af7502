//! Shared test harness modules for the Terrasight CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod insight_unit;
mod places_unit;
