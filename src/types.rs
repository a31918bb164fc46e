use crate::error::AssessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw data row of the tracts file, fields kept as text until evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TractRow {
    /// 1-based line in the source file (the header is line 1).
    pub line: u64,
    pub name: String,
    pub population: String,
    pub housing_units: String,
    pub land_area: String,
}

impl TractRow {
    pub fn new(
        line: u64,
        name: impl Into<String>,
        population: impl Into<String>,
        housing_units: impl Into<String>,
        land_area: impl Into<String>,
    ) -> Self {
        Self {
            line,
            name: name.into(),
            population: population.into(),
            housing_units: housing_units.into(),
            land_area: land_area.into(),
        }
    }
}

/// Square feet per person or per housing unit, fixed at two decimal places.
///
/// Stored as a whole number of hundredths so that ordering, equality and the
/// textual form all agree. `Display` yields the canonical text (`"12.35"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Density {
    hundredths: u64,
}

impl Density {
    pub const ZERO: Density = Density { hundredths: 0 };

    pub fn from_hundredths(hundredths: u64) -> Self {
        Self { hundredths }
    }

    pub fn hundredths(self) -> u64 {
        self.hundredths
    }

    /// True when the canonical text is `"0.00"`.
    pub fn is_zero(self) -> bool {
        self.hundredths == 0
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

impl FromStr for Density {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssessError::InvalidDensity(s.to_string());
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !digits(whole) || !digits(frac) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .map(Density::from_hundredths)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Density {
    type Error = AssessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Density> for String {
    fn from(density: Density) -> Self {
        density.to_string()
    }
}

/// Which of a tract's two densities is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Population,
    Housing,
}

impl Measure {
    pub const ALL: [Measure; 2] = [Measure::Population, Measure::Housing];

    pub fn label(self) -> &'static str {
        match self {
            Measure::Population => "population",
            Measure::Housing => "housing",
        }
    }

    /// What a single unit of the denominator is called in the report.
    pub fn unit(self) -> &'static str {
        match self {
            Measure::Population => "person",
            Measure::Housing => "house",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tract {
    pub name: String,
    pub population_density: Density,
    pub housing_density: Density,
}

impl Tract {
    pub fn density(&self, measure: Measure) -> Density {
        match measure {
            Measure::Population => self.population_density,
            Measure::Housing => self.housing_density,
        }
    }
}

/// Positions (into `DatasetSummary::tracts`) of the extremal tracts for one measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Extremes {
    pub(crate) sparsest: usize,
    /// Unset when every tract rounds to `0.00` for this measure.
    pub(crate) densest: Option<usize>,
}

/// Every assessed tract in input order plus the extremal tracts per measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub(crate) tracts: Vec<Tract>,
    pub(crate) population: Extremes,
    pub(crate) housing: Extremes,
}

impl DatasetSummary {
    pub fn tracts(&self) -> &[Tract] {
        &self.tracts
    }

    /// Largest density for the measure; first occurrence wins ties.
    pub fn sparsest(&self, measure: Measure) -> &Tract {
        &self.tracts[self.extremes(measure).sparsest]
    }

    /// Smallest density for the measure among tracts that do not round to `0.00`.
    pub fn densest(&self, measure: Measure) -> Option<&Tract> {
        self.extremes(measure).densest.map(|i| &self.tracts[i])
    }

    pub fn sparsest_population(&self) -> &Tract {
        self.sparsest(Measure::Population)
    }

    pub fn densest_population(&self) -> Option<&Tract> {
        self.densest(Measure::Population)
    }

    pub fn sparsest_housing(&self) -> &Tract {
        self.sparsest(Measure::Housing)
    }

    pub fn densest_housing(&self) -> Option<&Tract> {
        self.densest(Measure::Housing)
    }

    fn extremes(&self, measure: Measure) -> Extremes {
        match measure {
            Measure::Population => self.population,
            Measure::Housing => self.housing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_displays_two_decimals() {
        assert_eq!(Density::from_hundredths(0).to_string(), "0.00");
        assert_eq!(Density::from_hundredths(5).to_string(), "0.05");
        assert_eq!(Density::from_hundredths(1234).to_string(), "12.34");
        assert_eq!(Density::from_hundredths(100_000_000).to_string(), "1000000.00");
    }

    #[test]
    fn density_parses_canonical_and_short_forms() {
        assert_eq!("12.34".parse::<Density>().unwrap(), Density::from_hundredths(1234));
        assert_eq!("12.3".parse::<Density>().unwrap(), Density::from_hundredths(1230));
        assert_eq!("12".parse::<Density>().unwrap(), Density::from_hundredths(1200));
        assert!("0.00".parse::<Density>().unwrap().is_zero());
    }

    #[test]
    fn density_rejects_malformed_text() {
        for bad in ["", ".5", "1.234", "-1.00", "1e3", "abc", "1.x0", " 1.00"] {
            assert!(bad.parse::<Density>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn density_orders_numerically_not_lexically() {
        let nine: Density = "9.99".parse().unwrap();
        let ten: Density = "10.00".parse().unwrap();
        assert!(nine < ten);
    }
}
