//! Unit tests for the MACD indicator

use chrono::DateTime;
use stocklens::indicators::momentum::calculate_macd;
use stocklens::models::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.5,
                close - 0.5,
                close,
                1_000.0,
                DateTime::from_timestamp(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
            )
        })
        .collect()
}

#[test]
fn histogram_is_macd_minus_signal_everywhere() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
    let candles = candles_from_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9);
    assert_eq!(macd.macd.len(), candles.len());
    assert_eq!(macd.signal.len(), candles.len());
    assert_eq!(macd.histogram.len(), candles.len());
    for i in 0..candles.len() {
        assert_eq!(macd.histogram[i], macd.macd[i] - macd.signal[i]);
    }
}

#[test]
fn macd_starts_at_zero() {
    let candles = candles_from_closes(&[100.0, 101.0, 102.0]);
    let macd = calculate_macd(&candles, 12, 26, 9);
    // Both EMAs seed with the first close, so the line opens flat.
    assert_eq!(macd.macd[0], 0.0);
    assert_eq!(macd.histogram[0], 0.0);
}

#[test]
fn macd_turns_positive_in_an_uptrend() {
    let closes: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9);
    assert!(*macd.macd.last().unwrap() > 0.0);
}
