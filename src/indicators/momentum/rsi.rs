//! RSI (Relative Strength Index) indicator

use crate::models::Candle;

/// Calculate the RSI series.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss, both taken
/// as trailing rolling means of the per-bar deltas (not Wilder's smoothing).
/// When the loss term is zero the value is pinned to 100. Deltas exist from
/// index 1, so the first defined value sits at index `period`.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 || n <= period {
        return out;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    for i in period..n {
        let start = i + 1 - period;
        let avg_gain = gains[start..=i].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[start..=i].iter().sum::<f64>() / period as f64;

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        out[i] = Some(rsi);
    }

    out
}
