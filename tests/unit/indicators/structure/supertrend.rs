//! Unit tests for the SuperTrend state machine

use chrono::DateTime;
use stocklens::indicators::structure::calculate_supertrend;
use stocklens::models::Candle;

fn candle(i: usize, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(
        close,
        high,
        low,
        close,
        1_000.0,
        DateTime::from_timestamp(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
    )
}

/// Flat bars at 100 with a 2-point range: hl2 = 100, ATR(1) = 2, so the
/// bands sit at 94 and 106 with multiplier 3.
fn flat_bar(i: usize) -> Candle {
    candle(i, 101.0, 99.0, 100.0)
}

#[test]
fn seeds_on_lower_band_in_buy_mode() {
    let candles: Vec<Candle> = (0..5).map(flat_bar).collect();
    let st = calculate_supertrend(&candles, 1, 3.0);
    assert_eq!(st.line.len(), 5);
    assert_eq!(st.line[0], Some(94.0));
    assert_eq!(st.direction[0], 1);
    // Close stays above the line, so the state never flips.
    assert!(st.direction.iter().all(|&d| d == 1));
}

#[test]
fn direction_flips_exactly_once_on_a_single_crossing() {
    let mut candles: Vec<Candle> = (0..6).map(flat_bar).collect();
    // One crash bar closing below the prior line (94), then a flat tail.
    candles.push(candle(6, 91.0, 89.0, 90.0));
    for i in 7..12 {
        candles.push(candle(i, 91.0, 89.0, 90.0));
    }

    let st = calculate_supertrend(&candles, 1, 3.0);
    assert_eq!(st.direction[6], -1);
    // Crash bar: hl2 = 90, band width 6, line jumps to the upper band.
    assert_eq!(st.line[6], Some(96.0));

    let flips = st
        .direction
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .count();
    assert_eq!(flips, 1);
}

#[test]
fn equal_close_carries_state_forward() {
    let mut candles: Vec<Candle> = (0..3).map(flat_bar).collect();
    // Close lands exactly on the prior line (94): carry, don't flip.
    candles.push(candle(3, 95.0, 93.0, 94.0));

    let st = calculate_supertrend(&candles, 1, 3.0);
    assert_eq!(st.line[3], Some(94.0));
    assert_eq!(st.direction[3], 1);
}

#[test]
fn line_is_undefined_until_atr_forms() {
    let candles: Vec<Candle> = (0..10).map(flat_bar).collect();
    let st = calculate_supertrend(&candles, 7, 3.0);
    assert!(st.line[..6].iter().all(|v| v.is_none()));
    assert!(st.line[6..].iter().all(|v| v.is_some()));
    // Direction holds at +1 through the warm-up.
    assert!(st.direction[..6].iter().all(|&d| d == 1));
}
