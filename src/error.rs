use thiserror::Error;

/// Failures raised while loading, assessing or rendering a tract dataset.
///
/// Every variant is fatal to the run; nothing is retried.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("line {line}: tract '{tract}' has non-integer {field} value '{value}'")]
    Parse {
        line: u64,
        tract: String,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(
        "line {line}: tract '{tract}' has {field} value '{value}' above the maximum of {max}",
        max = u64::MAX
    )]
    OutOfRange {
        line: u64,
        tract: String,
        field: &'static str,
        value: String,
    },

    /// Line 1 refers to the header row.
    #[error("line {line}: required column '{column}' is missing")]
    MissingColumn { line: u64, column: &'static str },

    #[error("input contains no tract rows")]
    EmptyInput,

    #[error("invalid density value '{0}'")]
    InvalidDensity(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssessError>;
