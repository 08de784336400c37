//! Volatility squeeze flag
//!
//! Compares Bollinger Band width to a Keltner-style channel built from the
//! simplified ATR. When the bands sit strictly inside the channel, volatility
//! has contracted below what the ATR implies.

use crate::indicators::volatility::calculate_atr;
use crate::models::{BollingerSeries, Candle};

/// Calculate the squeeze flag series.
///
/// Keltner channel = Bollinger middle +/- atr_multiplier * ATR(atr_period);
/// squeeze = upper band < channel top and lower band > channel bottom.
/// Undefined wherever either channel is still warming up.
pub fn calculate_squeeze(
    candles: &[Candle],
    bollinger: &BollingerSeries,
    atr_period: usize,
    atr_multiplier: f64,
) -> Vec<Option<bool>> {
    let atr = calculate_atr(candles, atr_period);

    (0..candles.len())
        .map(|i| {
            match (
                bollinger.upper[i],
                bollinger.middle[i],
                bollinger.lower[i],
                atr[i],
            ) {
                (Some(upper), Some(middle), Some(lower), Some(atr)) => {
                    let kc_upper = middle + atr_multiplier * atr;
                    let kc_lower = middle - atr_multiplier * atr;
                    Some(upper < kc_upper && lower > kc_lower)
                }
                _ => None,
            }
        })
        .collect()
}
