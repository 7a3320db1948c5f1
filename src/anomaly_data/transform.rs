//! Unit conversion and the annual mean, expressed as lazy polars expressions.

use crate::types::schema::{ANNUAL_MEAN_COLUMN, HUNDREDTHS_PER_DEGREE, MONTH_COLUMNS};
use polars::prelude::*;

/// Converts every month column from hundredths of a degree to degrees (as `f64`).
pub fn to_degrees(frame: LazyFrame) -> LazyFrame {
    let converted: Vec<Expr> = MONTH_COLUMNS
        .iter()
        .map(|month| (col(*month).cast(DataType::Float64) / lit(HUNDREDTHS_PER_DEGREE)).alias(*month))
        .collect();
    frame.with_columns(converted)
}

/// Appends `annual-mean`, the arithmetic mean of the twelve month columns.
pub fn with_annual_mean(frame: LazyFrame) -> LazyFrame {
    let sum = MONTH_COLUMNS
        .iter()
        .fold(lit(0.0), |acc, month| acc + col(*month));
    frame.with_column((sum / lit(MONTH_COLUMNS.len() as f64)).alias(ANNUAL_MEAN_COLUMN))
}

/// Both steps on a loaded table.
pub fn annual_means(frame: DataFrame) -> PolarsResult<DataFrame> {
    with_annual_mean(to_degrees(frame.lazy())).collect()
}
