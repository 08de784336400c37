//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::candle::{self, Candle};
use crate::models::MacdSeries;

/// Calculate the MACD line, signal line and histogram.
///
/// MACD line = EMA(fast) - EMA(slow); signal = EMA of the MACD line;
/// histogram = MACD line - signal line, exactly, at every index.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let closes = candle::closes(candles);
    let ema_fast = math::ema(&closes, fast_period);
    let ema_slow = math::ema(&closes, slow_period);

    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal = math::ema(&macd, signal_period);
    let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
