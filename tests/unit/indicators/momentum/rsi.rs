//! Unit tests for the RSI indicator

use chrono::DateTime;
use stocklens::indicators::momentum::calculate_rsi;
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
fn rsi_warm_up_ends_at_period_index() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + (i % 3) as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi(&candles, 14);
    assert_eq!(rsi.len(), candles.len());
    assert!(rsi[..14].iter().all(|v| v.is_none()));
    assert!(rsi[14..].iter().all(|v| v.is_some()));
}

#[test]
fn rsi_pins_to_100_when_loss_is_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi(&candles, 14);
    for value in rsi[14..].iter().flatten() {
        assert_eq!(*value, 100.0);
    }
}

#[test]
fn rsi_is_zero_on_pure_downtrend() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi(&candles, 14);
    for value in rsi[14..].iter().flatten() {
        assert_eq!(*value, 0.0);
    }
}

#[test]
fn rsi_stays_within_bounds() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 13) % 7) as f64 - 3.0)
        .collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi(&candles, 14);
    for value in rsi.iter().flatten() {
        assert!((0.0..=100.0).contains(value));
    }
}

#[test]
fn rsi_on_too_short_series_is_all_undefined() {
    let candles = candles_from_closes(&[100.0, 101.0, 102.0]);
    let rsi = calculate_rsi(&candles, 14);
    assert!(rsi.iter().all(|v| v.is_none()));
}
