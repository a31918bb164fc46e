use crate::error::{AssessError, Result};
use crate::types::TractRow;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub const NAME_COLUMN: &str = "Name";
pub const POPULATION_COLUMN: &str = "Population";
pub const HOUSING_UNITS_COLUMN: &str = "Housing Units";
pub const LAND_AREA_COLUMN: &str = "Land Area";

/// Positions of the required columns within the header row.
struct ColumnIndices {
    name: usize,
    population: usize,
    housing_units: usize,
    land_area: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(AssessError::MissingColumn { line: 1, column })
        };

        Ok(Self {
            name: find(NAME_COLUMN)?,
            population: find(POPULATION_COLUMN)?,
            housing_units: find(HOUSING_UNITS_COLUMN)?,
            land_area: find(LAND_AREA_COLUMN)?,
        })
    }
}

pub fn load_tracts(path: &Path) -> Result<Vec<TractRow>> {
    info!("Loading tracts from {}", path.display());
    let rows = read_tracts(File::open(path)?)?;
    info!("Loaded {} tract rows", rows.len());
    Ok(rows)
}

/// Reads tab-delimited tract rows; columns may appear in any order and
/// unrecognised columns are ignored.
pub fn read_tracts<R: Read>(reader: R) -> Result<Vec<TractRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnIndices::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let field = |idx: usize, column: &'static str| {
            record
                .get(idx)
                .map(str::to_string)
                .ok_or(AssessError::MissingColumn { line, column })
        };

        rows.push(TractRow {
            line,
            name: field(columns.name, NAME_COLUMN)?,
            population: field(columns.population, POPULATION_COLUMN)?,
            housing_units: field(columns.housing_units, HOUSING_UNITS_COLUMN)?,
            land_area: field(columns.land_area, LAND_AREA_COLUMN)?,
        });
    }

    Ok(rows)
}
