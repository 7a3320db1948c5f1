//! Records which smoothing strategy produced the smoothed annual mean.

use std::fmt;

/// The strategy that produced the `annual-mean-lowess` column.
///
/// LOWESS is always attempted first. When it fails the pipeline substitutes a
/// centered rolling mean and reports it through this value, so callers can tell
/// the two apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingMethod {
    /// Locally weighted regression over (year, annual mean).
    Lowess {
        /// Share of the points used for each local fit.
        fraction: f64,
        /// Number of robustifying passes after the initial fit.
        iterations: usize,
    },
    /// Centered moving average used when LOWESS could not run.
    RollingMean {
        /// Number of years in the full window.
        window: usize,
    },
}

impl SmoothingMethod {
    /// Returns `true` when the LOWESS fit failed and the rolling mean was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SmoothingMethod::RollingMean { .. })
    }
}

/// # Examples
///
/// ```
/// use gistemp::SmoothingMethod;
///
/// let method = SmoothingMethod::RollingMean { window: 11 };
/// assert_eq!(method.to_string(), "centered rolling mean (window 11)");
/// ```
impl fmt::Display for SmoothingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothingMethod::Lowess {
                fraction,
                iterations,
            } => write!(f, "lowess (fraction {fraction}, {iterations} iterations)"),
            SmoothingMethod::RollingMean { window } => {
                write!(f, "centered rolling mean (window {window})")
            }
        }
    }
}
