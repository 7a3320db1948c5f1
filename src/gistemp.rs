//! This module provides the main entry point: it loads the GISTEMP table,
//! derives the annual mean in degrees Celsius and smooths it against the year.

use crate::anomaly_data::data_loader::AnomalyDataLoader;
use crate::anomaly_data::transform::annual_means;
use crate::error::GistempError;
use crate::smoothing::{smooth_with_fallback, SmoothingConfig};
use crate::types::annual_anomalies::{float_column, AnnualAnomalies};
use crate::types::schema::{ANNUAL_MEAN_COLUMN, SMOOTHED_COLUMN, YEAR_COLUMN};
use bon::bon;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Runs the load → convert → annual mean → smooth pipeline.
///
/// Use [`Gistemp::from_csv`] to configure and run it.
pub struct Gistemp;

#[bon]
impl Gistemp {
    /// Reads a GISTEMP CSV table and returns the annual anomalies with their smoothed trend.
    ///
    /// This method uses a builder pattern. Call `.call()` to run it.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `path` - Location of the CSV file, with a header row holding `Year` and `Jan` … `Dec`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.null_markers(Vec<String>)`: Tokens read as missing values. Defaults to `["***", "****"]`.
    /// * `.lowess_fraction(f64)`: LOWESS bandwidth as a share of the years. Defaults to `0.1`.
    /// * `.lowess_iterations(usize)`: LOWESS robustifying passes. Defaults to `3`.
    /// * `.lowess_delta(f64)`: LOWESS interpolation distance in years. Defaults to `0.0`.
    /// * `.fallback_window(usize)`: Width of the centered rolling mean used when LOWESS
    ///   fails. Defaults to `11`.
    ///
    /// # Errors
    ///
    /// Returns [`GistempError::Load`] if the file is missing, is not valid CSV or lacks
    /// one of the expected columns. Returns [`GistempError::Smoothing`] only when LOWESS
    /// failed and the fallback window is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use gistemp::{Gistemp, GistempError};
    /// # use std::path::Path;
    /// # fn main() -> Result<(), GistempError> {
    /// let anomalies = Gistemp::from_csv(Path::new("ExcelFormattedGISTEMPDataCSV.csv"))
    ///     .lowess_fraction(0.2)
    ///     .call()?;
    /// println!("{} years smoothed with {}", anomalies.len(), anomalies.smoothing);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = from_csv)]
    #[doc(hidden)]
    pub fn build_from_csv(
        #[builder(start_fn)] path: &Path,
        null_markers: Option<Vec<String>>,
        lowess_fraction: Option<f64>,
        lowess_iterations: Option<usize>,
        lowess_delta: Option<f64>,
        fallback_window: Option<usize>,
    ) -> Result<AnnualAnomalies, GistempError> {
        let defaults = SmoothingConfig::default();
        let config = SmoothingConfig {
            fraction: lowess_fraction.unwrap_or(defaults.fraction),
            iterations: lowess_iterations.unwrap_or(defaults.iterations),
            delta: lowess_delta.unwrap_or(defaults.delta),
            fallback_window: fallback_window.unwrap_or(defaults.fallback_window),
        };

        let mut loader = AnomalyDataLoader::new(path);
        if let Some(markers) = null_markers {
            loader = loader.with_null_markers(markers);
        }
        let mut frame = annual_means(loader.load()?)?;

        let years: Vec<f64> = frame
            .column(YEAR_COLUMN)
            .and_then(|c| c.cast(&DataType::Float64))
            .map_err(|e| GistempError::ColumnNotFound(YEAR_COLUMN.to_string(), e))?
            .f64()?
            .into_no_null_iter()
            .collect();
        let means = float_column(&frame, ANNUAL_MEAN_COLUMN)?;

        let smoothed = smooth_with_fallback(&years, &means, &config)?;
        frame.with_column(Series::new(SMOOTHED_COLUMN.into(), smoothed.values))?;

        match (years.first(), years.last()) {
            (Some(first), Some(last)) => info!(
                "Computed annual means for {} years ({}-{}), smoothed with {}",
                years.len(),
                first,
                last,
                smoothed.method
            ),
            _ => info!("No complete years found in {:?}", path),
        }

        Ok(AnnualAnomalies::new(frame, smoothed.method))
    }
}
