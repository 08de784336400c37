//! Support and resistance level detection
//!
//! Scans for fractal extrema over a centered window. A level at index i needs
//! `window` bars of future data, so the most recent `window` bars can never
//! produce one; that is inherent to centered-window detection, not a defect.

use crate::common::math;
use crate::models::candle::{self, Candle};
use crate::models::{Level, LevelKind};

/// Detect support and resistance levels over a symmetric window.
///
/// Index i is a Resistance when its high equals the maximum high over
/// [i - window, i + window], and a Support when its low equals the minimum
/// low over the same span. An index may be emitted as both. Output is
/// chronological; nearby levels are not merged or deduplicated.
pub fn detect_levels(candles: &[Candle], window: usize) -> Vec<Level> {
    let highs = candle::highs(candles);
    let lows = candle::lows(candles);
    let window_max = math::rolling_max_centered(&highs, window);
    let window_min = math::rolling_min_centered(&lows, window);

    let mut levels = Vec::new();
    for (i, candle) in candles.iter().enumerate() {
        if window_max[i] == Some(candle.high) {
            levels.push(Level {
                timestamp: candle.timestamp,
                price: candle.high,
                kind: LevelKind::Resistance,
            });
        }
        if window_min[i] == Some(candle.low) {
            levels.push(Level {
                timestamp: candle.timestamp,
                price: candle.low,
                kind: LevelKind::Support,
            });
        }
    }

    levels
}
