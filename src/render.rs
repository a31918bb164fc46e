use crate::error::Result;
use crate::types::{DatasetSummary, Density, Measure, Tract};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// One line of the densities table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Population Density")]
    pub population_density: Density,
    #[serde(rename = "Housing Density")]
    pub housing_density: Density,
}

impl From<&Tract> for DensityRecord {
    fn from(tract: &Tract) -> Self {
        Self {
            name: tract.name.clone(),
            population_density: tract.population_density,
            housing_density: tract.housing_density,
        }
    }
}

pub fn write_densities_file(path: &Path, summary: &DatasetSummary) -> Result<()> {
    write_densities(File::create(path)?, summary)?;
    info!("Wrote {} tract densities to {}", summary.tracts().len(), path.display());
    Ok(())
}

/// Tab-delimited table of every tract in input order.
pub fn write_densities<W: Write>(writer: W, summary: &DatasetSummary) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for tract in summary.tracts() {
        wtr.serialize(DensityRecord::from(tract))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_min_max_file(path: &Path, summary: &DatasetSummary) -> Result<()> {
    write_min_max(File::create(path)?, summary)?;
    info!("Wrote extremal densities to {}", path.display());
    Ok(())
}

/// Four report lines: sparsest and densest population, then sparsest and
/// densest housing.
pub fn write_min_max<W: Write>(mut writer: W, summary: &DatasetSummary) -> Result<()> {
    for measure in Measure::ALL {
        let sparsest = Some(summary.sparsest(measure));
        writeln!(writer, "{}", extreme_line("sparsest", measure, sparsest))?;
        writeln!(writer, "{}", extreme_line("densest", measure, summary.densest(measure)))?;
    }
    writer.flush()?;
    Ok(())
}

fn extreme_line(kind: &str, measure: Measure, tract: Option<&Tract>) -> String {
    match tract {
        Some(tract) => format!(
            "The {} {} density is at {} with {} square feet per {}.",
            kind,
            measure.label(),
            tract.name,
            tract.density(measure),
            measure.unit()
        ),
        None => {
            warn!("Every tract has a {} density of 0.00; no densest tract", measure.label());
            format!("No tract has a nonzero {} density.", measure.label())
        }
    }
}
