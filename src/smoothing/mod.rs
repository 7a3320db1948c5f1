//! Smoothing of the annual-mean series: LOWESS with a rolling-mean fallback.

pub mod error;
pub mod rolling;

use crate::types::smoothing_method::SmoothingMethod;
use error::SmoothingError;
use log::{debug, warn};
use lowess::prelude::{Batch, Bisquare, Lowess, NoBoundary, ReturnOriginal, Tricube, MAR};
use rolling::centered_rolling_mean;

/// Parameters of the smoothing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig {
    /// LOWESS bandwidth as a share of the points.
    pub fraction: f64,
    /// LOWESS robustifying passes.
    pub iterations: usize,
    /// LOWESS interpolation distance (0 fits every point).
    pub delta: f64,
    /// Full width of the fallback centered moving average.
    pub fallback_window: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            fraction: 0.1,
            iterations: 3,
            delta: 0.0,
            fallback_window: 11,
        }
    }
}

/// Smoothed values in input order and the method that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothed {
    pub values: Vec<f64>,
    pub method: SmoothingMethod,
}

/// Cleveland's robust LOWESS of `values` against `x`, returned in input order.
///
/// Tricube neighbourhood weights and bisquare robustness weights scaled by
/// `6 * median(|r|)`. The ends of the series are fitted without padding, and a
/// neighbourhood whose weights are all zero keeps the observed value.
///
/// # Errors
///
/// Returns [`SmoothingError::Lowess`] for empty, mismatched, single-point or
/// non-finite input and for out-of-range parameters, and
/// [`SmoothingError::NonFiniteFit`] if a local fit is not finite.
pub fn fit_lowess(
    x: &[f64],
    values: &[f64],
    config: &SmoothingConfig,
) -> Result<Vec<f64>, SmoothingError> {
    let model = Lowess::new()
        .fraction(config.fraction)
        .iterations(config.iterations)
        .delta(config.delta)
        .weight_function(Tricube)
        .robustness_method(Bisquare)
        .scaling_method(MAR)
        .zero_weight_fallback(ReturnOriginal)
        .boundary_policy(NoBoundary)
        .adapter(Batch)
        .build()?;

    let fitted = model.fit(x, values)?.y;
    if let Some(i) = fitted.iter().position(|v| !v.is_finite()) {
        return Err(SmoothingError::NonFiniteFit { x: x[i] });
    }
    Ok(fitted)
}

/// Smooths `values` against `x` with LOWESS, falling back to a centered
/// rolling mean (`min_periods = 1`) when the LOWESS fit fails for any reason.
///
/// # Errors
///
/// Only the fallback can fail, with [`SmoothingError::InvalidWindow`] when
/// `config.fallback_window` is zero.
pub fn smooth_with_fallback(
    x: &[f64],
    values: &[f64],
    config: &SmoothingConfig,
) -> Result<Smoothed, SmoothingError> {
    debug!("Smoothing {} values with {:?}", values.len(), config);

    match fit_lowess(x, values, config) {
        Ok(smoothed) => Ok(Smoothed {
            values: smoothed,
            method: SmoothingMethod::Lowess {
                fraction: config.fraction,
                iterations: config.iterations,
            },
        }),
        Err(e) => {
            warn!(
                "Lowess smoothing failed ({}), using a centered rolling mean with window {}",
                e, config.fallback_window
            );
            let smoothed = centered_rolling_mean(values, config.fallback_window, 1)?;
            Ok(Smoothed {
                values: smoothed,
                method: SmoothingMethod::RollingMean {
                    window: config.fallback_window,
                },
            })
        }
    }
}
