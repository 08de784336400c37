//! Bollinger Bands indicator

use crate::common::math;
use crate::models::candle::{self, Candle};
use crate::models::BollingerSeries;

/// Calculate Bollinger Bands over closing prices.
///
/// Middle = rolling mean; upper/lower = middle +/- k * rolling std. All three
/// bands are undefined until a full window has accumulated.
pub fn calculate_bollinger_bands(candles: &[Candle], period: usize, k: f64) -> BollingerSeries {
    let closes = candle::closes(candles);
    let middle = math::rolling_mean(&closes, period);
    let std = math::rolling_std(&closes, period);

    let upper: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m + k * s),
            _ => None,
        })
        .collect();
    let lower: Vec<Option<f64>> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - k * s),
            _ => None,
        })
        .collect();

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}
