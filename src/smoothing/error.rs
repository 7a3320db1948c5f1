use lowess::prelude::LowessError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothingError {
    #[error("Lowess fit failed: {0}")]
    Lowess(#[from] LowessError),

    #[error("Invalid rolling window: window {window}, min_periods {min_periods} (both must be >= 1)")]
    InvalidWindow { window: usize, min_periods: usize },

    #[error("Lowess fit at x={x} produced a non-finite value")]
    NonFiniteFit { x: f64 },
}
