//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::candle::{self, Candle};

/// Calculate the EMA series over closing prices.
///
/// Recursively defined from the first bar, so the output has no warm-up gap.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Vec<f64> {
    math::ema(&candle::closes(candles), period)
}
