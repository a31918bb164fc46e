//! Population and housing density statistics for census tracts.
//!
//! `evaluate_row` and `assess_dataset` are pure; [`run`] wraps them with the
//! file reads and writes of a full batch.

pub mod config;
pub mod data;
pub mod error;
pub mod processing;
pub mod render;
pub mod types;

pub use config::AppConfig;
pub use error::AssessError;
pub use processing::{assess_dataset, evaluate_row, round_density};
pub use types::{DatasetSummary, Density, Measure, Tract, TractRow};

use anyhow::{Context, Result};
use tracing::info;

/// Loads the tracts file, assesses it and writes both output files.
///
/// Nothing is written unless the whole input assesses cleanly.
pub fn run(config: &AppConfig) -> Result<DatasetSummary> {
    // 1. Load rows
    let rows = data::load_tracts(&config.input.tracts)
        .with_context(|| format!("Failed to load tracts from {:?}", config.input.tracts))?;

    // 2. Assess
    let summary = processing::assess_dataset(&rows)
        .with_context(|| format!("Failed to assess {:?}", config.input.tracts))?;
    info!("Assessed {} tracts", summary.tracts().len());

    // 3. Write outputs
    render::write_min_max_file(&config.output.min_max, &summary)
        .with_context(|| format!("Failed to write {:?}", config.output.min_max))?;
    render::write_densities_file(&config.output.densities, &summary)
        .with_context(|| format!("Failed to write {:?}", config.output.densities))?;

    Ok(summary)
}
