//! SuperTrend indicator
//!
//! A trailing-stop overlay with a directional state. Each output depends on
//! the previous output, not just the previous input, so the series is folded
//! sequentially and never vectorized.

use crate::indicators::volatility::calculate_atr;
use crate::models::{Candle, SupertrendSeries};

/// Calculate the SuperTrend line and direction series.
///
/// Bands: hl2 +/- multiplier * ATR(period). The recurrence seeds at the first
/// bar where the band is defined (line = lower band, direction = +1); while
/// the ATR is still warming up the line is undefined and the direction holds
/// at +1. After the seed: close above the prior line flips to the lower band
/// and +1, close below flips to the upper band and -1, and an exactly equal
/// close carries both forward unchanged.
pub fn calculate_supertrend(
    candles: &[Candle],
    period: usize,
    multiplier: f64,
) -> SupertrendSeries {
    let atr = calculate_atr(candles, period);

    let mut line: Vec<Option<f64>> = Vec::with_capacity(candles.len());
    let mut direction: Vec<i8> = Vec::with_capacity(candles.len());

    let mut prev_line: Option<f64> = None;
    let mut prev_direction: i8 = 1;

    for (i, candle) in candles.iter().enumerate() {
        let bands = atr[i].map(|atr| {
            let hl_avg = (candle.high + candle.low) / 2.0;
            let width = multiplier * atr;
            (hl_avg + width, hl_avg - width)
        });

        let (current_line, current_direction) = match (bands, prev_line) {
            (Some((upper, lower)), Some(prev)) => {
                if candle.close > prev {
                    (Some(lower), 1)
                } else if candle.close < prev {
                    (Some(upper), -1)
                } else {
                    (Some(prev), prev_direction)
                }
            }
            // First bar with a defined band seeds the state machine.
            (Some((_, lower)), None) => (Some(lower), 1),
            // Band not formed yet; nothing to track.
            (None, _) => (None, prev_direction),
        };

        line.push(current_line);
        direction.push(current_direction);
        prev_line = current_line;
        prev_direction = current_direction;
    }

    SupertrendSeries { line, direction }
}
