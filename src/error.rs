//! @ai:module:intent Define error types for sampling-run loading and reporting
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all sampeval core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed delimited input in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("Invalid numeric value '{value}' for column '{column}' at {path}:{line}")]
    InvalidNumber {
        column: &'static str,
        line: u64,
        value: String,
        path: PathBuf,
    },

    #[error("No delimited run files found at {0}")]
    NoInput(PathBuf),

    #[error("No data.csv found under reference directory {0}")]
    MissingReference(PathBuf),

    #[error("Invalid result-table cell '{value}' in column '{column}'")]
    InvalidCell { column: String, value: String },

    #[error("Invalid prioritization label '{0}'")]
    InvalidPrioritization(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
