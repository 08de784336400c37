//! Unit tests for the per-symbol analysis facade

use chrono::DateTime;
use stocklens::analysis::analyze;
use stocklens::config::AnalysisConfig;
use stocklens::error::AnalysisError;
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
fn empty_series_is_rejected() {
    let config = AnalysisConfig::default();
    let err = analyze("NVDA", &[], &config, None).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySeries));
}

#[test]
fn short_series_degrades_to_partial_indicators() {
    let config = AnalysisConfig::default();
    let candles = candles_from_closes(&[100.0, 101.0, 102.0]);
    let report = analyze("NVDA", &candles, &config, None).unwrap();
    // RSI never warmed up, but the report still carries every series aligned.
    assert!(report.indicators.rsi.iter().all(|v| v.is_none()));
    assert_eq!(report.indicators.ema_fast.len(), 3);
    assert!(report.levels.is_empty());
    assert!(report.risk.is_none());
}

#[test]
fn price_change_compares_the_last_two_bars() {
    let config = AnalysisConfig::default();
    let candles = candles_from_closes(&[100.0, 104.0]);
    let report = analyze("NVDA", &candles, &config, None).unwrap();
    assert_eq!(report.price.last_close, 104.0);
    assert_eq!(report.price.change, 4.0);
    assert!((report.price.change_pct - 4.0).abs() < 1e-12);
}

#[test]
fn risk_plan_appears_only_with_a_stop() {
    let config = AnalysisConfig::default();
    let candles = candles_from_closes(&[100.0; 30]);

    let without = analyze("NVDA", &candles, &config, None).unwrap();
    assert!(without.risk.is_none());

    // Default config: 10k capital at 2% risk, 5 points to the stop.
    let with = analyze("NVDA", &candles, &config, Some(95.0)).unwrap();
    let plan = with.risk.unwrap();
    assert_eq!(plan.shares, 40);
    assert_eq!(plan.take_profit, 110.0);
}

#[test]
fn invalid_stop_fails_the_analysis() {
    let config = AnalysisConfig::default();
    let candles = candles_from_closes(&[100.0; 30]);
    let err = analyze("NVDA", &candles, &config, Some(101.0)).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidStopLoss { .. }));
}

#[test]
fn analysis_is_idempotent() {
    let config = AnalysisConfig::default();
    let closes: Vec<f64> = (0..260)
        .map(|i| 100.0 + (i as f64 * 0.31).sin() * 5.0 + i as f64 * 0.05)
        .collect();
    let candles = candles_from_closes(&closes);

    let first = analyze("NVDA", &candles, &config, Some(80.0)).unwrap();
    let second = analyze("NVDA", &candles, &config, Some(80.0)).unwrap();
    assert_eq!(first, second);
}
