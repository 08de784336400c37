//! Series math primitives
//!
//! Pure, stateless functions over ordered numeric sequences. Every function
//! returns a series of the same length as its input; entries that cannot be
//! computed yet (warm-up) are `None`.

/// Exponential moving average over the whole series.
///
/// Smoothing factor alpha = 2 / (period + 1), seeded with the first value,
/// no bias adjustment. Defined at every index, including index 0.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);

    for &value in &values[1..] {
        current = alpha * value + (1.0 - alpha) * current;
        out.push(current);
    }

    out
}

/// Simple moving average over the trailing `window` values.
///
/// Undefined for indices < window - 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);

    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = Some(sum / window as f64);
    }

    out
}

/// Sample standard deviation over the trailing `window` values.
///
/// Undefined for indices < window - 1. Uses the n-1 denominator, matching
/// the usual rolling-std convention.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window < 2 || values.len() < window {
        return out;
    }

    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance =
            slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        out[i] = Some(variance.sqrt());
    }

    out
}

/// Maximum over a centered window of total width 2 * half_width + 1.
///
/// Defined only where the full window fits inside the series.
pub fn rolling_max_centered(values: &[f64], half_width: usize) -> Vec<Option<f64>> {
    centered_extremum(values, half_width, f64::max)
}

/// Minimum over a centered window of total width 2 * half_width + 1.
///
/// Defined only where the full window fits inside the series.
pub fn rolling_min_centered(values: &[f64], half_width: usize) -> Vec<Option<f64>> {
    centered_extremum(values, half_width, f64::min)
}

fn centered_extremum(
    values: &[f64],
    half_width: usize,
    pick: fn(f64, f64) -> f64,
) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if values.len() < 2 * half_width + 1 {
        return out;
    }

    for i in half_width..values.len() - half_width {
        let window = &values[i - half_width..=i + half_width];
        out[i] = window.iter().copied().reduce(pick);
    }

    out
}
