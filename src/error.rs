use crate::anomaly_data::error::LoadError;
use crate::smoothing::error::SmoothingError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistempError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Smoothing(#[from] SmoothingError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),
}
