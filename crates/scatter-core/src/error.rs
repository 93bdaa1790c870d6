// File: crates/scatter-core/src/error.rs
// Summary: Error type for dataset loading, configuration and scene construction.

use thiserror::Error;

use crate::data::Field;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No records to derive a scale domain from.
    #[error("dataset is empty; cannot compute scale domains")]
    EmptyDataset,

    /// A record carries a numeric field that does not parse to a finite, non-negative number.
    #[error("invalid record at line {line} ({state}): field `{field}` = {value:?}: {reason}")]
    InvalidRecord {
        line: u64,
        state: String,
        field: Field,
        value: String,
        reason: &'static str,
    },

    #[error("input is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("unknown field `{0}` (expected one of: smokes, age)")]
    UnknownField(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value parsed but is unusable (non-finite, non-positive, out of bounds).
    #[error("config `{key}`: {reason}")]
    InvalidConfig { key: &'static str, reason: &'static str },

    #[error("render: {0}")]
    Render(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
