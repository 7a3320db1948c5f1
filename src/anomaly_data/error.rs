use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading CSV file '{path}'")]
    CsvReadIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing error reading CSV file '{path}'")]
    CsvReadPolars {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
