//! Contains `AnnualAnomalies`, the table produced by a pipeline run.

use crate::types::schema::{ANNUAL_MEAN_COLUMN, SMOOTHED_COLUMN, YEAR_COLUMN};
use crate::types::smoothing_method::SmoothingMethod;
use crate::GistempError;
use polars::prelude::*;

/// The GISTEMP table after filtering, unit conversion and smoothing.
///
/// `frame` holds the `Year` column, the twelve month columns in degrees Celsius,
/// the `annual-mean` column and the `annual-mean-lowess` column, one row per
/// complete year in file order.
///
/// Instances are obtained via [`crate::Gistemp::from_csv`].
#[derive(Debug, Clone)]
pub struct AnnualAnomalies {
    /// The underlying table.
    pub frame: DataFrame,
    /// The strategy that produced the smoothed column.
    pub smoothing: SmoothingMethod,
}

impl AnnualAnomalies {
    pub fn new(frame: DataFrame, smoothing: SmoothingMethod) -> Self {
        Self { frame, smoothing }
    }

    /// Number of retained years.
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The years of the retained rows, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`GistempError::ColumnNotFound`] if the frame no longer holds an
    /// integer `Year` column.
    pub fn years(&self) -> Result<Vec<i64>, GistempError> {
        let years = self
            .frame
            .column(YEAR_COLUMN)
            .and_then(|c| c.i64())
            .map_err(|e| GistempError::ColumnNotFound(YEAR_COLUMN.to_string(), e))?;
        Ok(years.into_iter().flatten().collect())
    }

    /// The annual means in degrees Celsius.
    pub fn annual_means(&self) -> Result<Vec<f64>, GistempError> {
        float_column(&self.frame, ANNUAL_MEAN_COLUMN)
    }

    /// The smoothed annual means in degrees Celsius.
    pub fn smoothed(&self) -> Result<Vec<f64>, GistempError> {
        float_column(&self.frame, SMOOTHED_COLUMN)
    }
}

pub(crate) fn float_column(frame: &DataFrame, name: &str) -> Result<Vec<f64>, GistempError> {
    let values = frame
        .column(name)
        .and_then(|c| c.f64())
        .map_err(|e| GistempError::ColumnNotFound(name.to_string(), e))?;
    Ok(values.into_iter().flatten().collect())
}
