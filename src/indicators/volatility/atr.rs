//! ATR (Average True Range) indicator, simplified

use crate::common::math;
use crate::models::Candle;

/// Calculate the simplified ATR series: rolling mean of (high - low).
///
/// Intentionally not Wilder's true range; there is no gap handling against
/// the prior close. The signal thresholds downstream are tuned against this
/// proxy, so it must not be "corrected".
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let ranges: Vec<f64> = candles.iter().map(|c| c.high - c.low).collect();
    math::rolling_mean(&ranges, period)
}
