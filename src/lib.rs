mod anomaly_data;
mod chart;
mod error;
mod gistemp;
mod smoothing;
mod types;

pub use error::GistempError;
pub use gistemp::*;

pub use anomaly_data::data_loader::AnomalyDataLoader;
pub use anomaly_data::error::LoadError;
pub use anomaly_data::transform::{annual_means, to_degrees, with_annual_mean};

pub use chart::{build_chart, chart_frame, smoothed_label, CHART_TITLE, Y_AXIS_TITLE};

pub use smoothing::error::SmoothingError;
pub use smoothing::rolling::centered_rolling_mean;
pub use smoothing::{fit_lowess, smooth_with_fallback, Smoothed, SmoothingConfig};

pub use types::annual_anomalies::AnnualAnomalies;
pub use types::schema::*;
pub use types::smoothing_method::SmoothingMethod;
