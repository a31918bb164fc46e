use crate::error::{AssessError, Result};
use crate::types::{DatasetSummary, Density, Extremes, Measure, Tract, TractRow};
use std::num::{IntErrorKind, ParseIntError};
use tracing::debug;

/// `land_area / denominator` rounded half-up to two decimals; `0.00` when the
/// denominator is zero.
pub fn round_density(land_area: u64, denominator: u64) -> Density {
    if denominator == 0 {
        return Density::ZERO;
    }
    let numerator = u128::from(land_area) * 100;
    let denominator = u128::from(denominator);
    let hundredths = (numerator + denominator / 2) / denominator;
    Density::from_hundredths(u64::try_from(hundredths).unwrap_or(u64::MAX))
}

/// Derives both densities for a single input row.
pub fn evaluate_row(row: &TractRow) -> Result<Tract> {
    let population = parse_count(row, "Population", &row.population)?;
    let housing_units = parse_count(row, "Housing Units", &row.housing_units)?;
    let land_area = parse_count(row, "Land Area", &row.land_area)?;

    Ok(Tract {
        name: row.name.clone(),
        population_density: round_density(land_area, population),
        housing_density: round_density(land_area, housing_units),
    })
}

fn parse_count(row: &TractRow, field: &'static str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|source: ParseIntError| match source.kind() {
        IntErrorKind::PosOverflow => AssessError::OutOfRange {
            line: row.line,
            tract: row.name.clone(),
            field,
            value: value.to_string(),
        },
        _ => AssessError::Parse {
            line: row.line,
            tract: row.name.clone(),
            field,
            value: value.to_string(),
            source,
        },
    })
}

/// Evaluates every row in order and tracks the extremal tracts in the same pass.
pub fn assess_dataset(rows: &[TractRow]) -> Result<DatasetSummary> {
    if rows.is_empty() {
        return Err(AssessError::EmptyInput);
    }

    let mut tracts = Vec::with_capacity(rows.len());
    let mut population = Tracker::default();
    let mut housing = Tracker::default();

    for row in rows {
        let tract = evaluate_row(row)?;
        let index = tracts.len();
        population.observe(index, tract.density(Measure::Population));
        housing.observe(index, tract.density(Measure::Housing));
        tracts.push(tract);
    }

    debug!("Assessed {} tracts", tracts.len());

    Ok(DatasetSummary {
        tracts,
        population: population.finish()?,
        housing: housing.finish()?,
    })
}

/// Running extrema for one measure.
#[derive(Default)]
struct Tracker {
    sparsest: Option<(usize, Density)>,
    densest: Option<(usize, Density)>,
}

impl Tracker {
    fn observe(&mut self, index: usize, density: Density) {
        if self.sparsest.map_or(true, |(_, best)| best < density) {
            self.sparsest = Some((index, density));
        }
        // A tract that rounds to 0.00 is never the densest.
        if !density.is_zero() && self.densest.map_or(true, |(_, best)| best > density) {
            self.densest = Some((index, density));
        }
    }

    fn finish(self) -> Result<Extremes> {
        let (sparsest, _) = self.sparsest.ok_or(AssessError::EmptyInput)?;
        Ok(Extremes {
            sparsest,
            densest: self.densest.map(|(index, _)| index),
        })
    }
}
