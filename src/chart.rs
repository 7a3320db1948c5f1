//! Line chart of the annual mean, its smoothed trend and the zero baseline.
//!
//! The chart is rendered with `plotlars` and shown in the browser; nothing is
//! written to disk.

use crate::error::GistempError;
use crate::types::annual_anomalies::AnnualAnomalies;
use crate::types::schema::{ANNUAL_MEAN_COLUMN, SMOOTHED_COLUMN, YEAR_COLUMN};
use crate::types::smoothing_method::SmoothingMethod;
use log::info;
use plotlars::{Axis, Legend, Line, LinePlot, Plot, Rgb, Text};
use polars::prelude::*;

pub const CHART_TITLE: &str = "Global Temperature Anomaly (NASA GISTEMP) — Annual Mean with Lowess";
pub const Y_AXIS_TITLE: &str = "Temperature Anomaly (°C)";

const ANNUAL_MEAN_LABEL: &str = "Annual Mean";
const BASELINE_LABEL: &str = "Baseline";

const BLUE: Rgb = Rgb(0, 0, 255);
const RED: Rgb = Rgb(255, 0, 0);
const GRAY: Rgb = Rgb(128, 128, 128);

/// Legend label of the smoothed series.
pub fn smoothed_label(method: &SmoothingMethod) -> String {
    match method {
        SmoothingMethod::Lowess { .. } => "Lowess Smoothed".to_string(),
        SmoothingMethod::RollingMean { window } => format!("Rolling Mean ({window} years)"),
    }
}

/// The series drawn on the chart, with their legend labels as column names.
///
/// Columns: `Year`, `Annual Mean`, the smoothed label, `Baseline` (all zero).
pub fn chart_frame(anomalies: &AnnualAnomalies) -> Result<DataFrame, GistempError> {
    let frame = anomalies
        .frame
        .clone()
        .lazy()
        .select([
            col(YEAR_COLUMN),
            col(ANNUAL_MEAN_COLUMN).alias(ANNUAL_MEAN_LABEL),
            col(SMOOTHED_COLUMN).alias(smoothed_label(&anomalies.smoothing)),
        ])
        .with_column(lit(0.0).alias(BASELINE_LABEL))
        .collect()?;
    Ok(frame)
}

/// Builds the chart without displaying it.
pub fn build_chart(anomalies: &AnnualAnomalies) -> Result<LinePlot, GistempError> {
    let data = chart_frame(anomalies)?;
    let smoothed = smoothed_label(&anomalies.smoothing);

    Ok(LinePlot::builder()
        .data(&data)
        .x(YEAR_COLUMN)
        .y(ANNUAL_MEAN_LABEL)
        .additional_lines(vec![smoothed.as_str(), BASELINE_LABEL])
        .colors(vec![BLUE, RED, GRAY])
        .lines(vec![Line::Solid, Line::Solid, Line::Dash])
        .width(1.6)
        .plot_title(Text::from(CHART_TITLE).font("Arial").size(18))
        .x_title("Year")
        .y_title(Text::from(Y_AXIS_TITLE).color(Rgb(0, 0, 0)))
        .y_axis(&Axis::new().value_color(Rgb(0, 0, 0)).show_grid(true))
        .legend(&Legend::new().x(0.05).y(0.95))
        .build())
}

impl AnnualAnomalies {
    /// Shows the chart in the browser. Blocks only as long as the plotting backend does.
    pub fn plot(&self) -> Result<(), GistempError> {
        info!("Rendering chart of {} years", self.len());
        build_chart(self)?.plot();
        Ok(())
    }
}
