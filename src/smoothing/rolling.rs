//! Centered moving average.

use crate::smoothing::error::SmoothingError;

/// Centered rolling mean over `values`.
///
/// For index `i` the window covers `[i - window / 2, i + (window - 1) / 2]`,
/// clipped to the data, so windows shrink near both ends. `NaN` values are
/// skipped. A position with fewer than `min_periods` usable values yields `NaN`.
///
/// # Errors
///
/// Returns [`SmoothingError::InvalidWindow`] if `window` or `min_periods` is zero.
///
/// # Examples
///
/// ```
/// use gistemp::centered_rolling_mean;
///
/// let means = centered_rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, 1).unwrap();
/// assert_eq!(means, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
/// ```
pub fn centered_rolling_mean(
    values: &[f64],
    window: usize,
    min_periods: usize,
) -> Result<Vec<f64>, SmoothingError> {
    if window == 0 || min_periods == 0 {
        return Err(SmoothingError::InvalidWindow {
            window,
            min_periods,
        });
    }

    let n = values.len();
    let before = window / 2;
    let after = (window - 1) / 2;

    let means = (0..n)
        .map(|i| {
            let left = i.saturating_sub(before);
            let right = (i + after).min(n - 1);
            let (sum, count) = values[left..=right]
                .iter()
                .filter(|v| !v.is_nan())
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            if count >= min_periods {
                sum / count as f64
            } else {
                f64::NAN
            }
        })
        .collect();
    Ok(means)
}
