//! Per-symbol analysis facade
//!
//! Runs the whole indicator engine, level detector and signal classifier over
//! one already-materialized candle series. Synchronous, deterministic, and
//! free of shared state; fetching the series belongs to the provider layer.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::indicators;
use crate::indicators::structure::detect_levels;
use crate::models::{Candle, IndicatorBundle, Level, PriceChange, RiskPlan, SignalSummary};
use crate::risk;
use crate::signals::SignalEngine;

/// Everything derived from one symbol's series in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub price: PriceChange,
    pub indicators: IndicatorBundle,
    pub levels: Vec<Level>,
    pub signals: SignalSummary,
    /// Present only when a stop-loss was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskPlan>,
}

/// Analyze one symbol's candle series.
///
/// The series must be non-empty and ordered by ascending timestamp. A series
/// shorter than an indicator's warm-up still succeeds; that indicator simply
/// carries undefined leading entries. A supplied `stop_loss` at or above the
/// last close fails with `InvalidStopLoss`.
pub fn analyze(
    symbol: &str,
    candles: &[Candle],
    config: &AnalysisConfig,
    stop_loss: Option<f64>,
) -> Result<AnalysisReport, AnalysisError> {
    if candles.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let bundle = indicators::calculate_bundle(candles, config);
    let levels = detect_levels(candles, config.level_window);
    let signals = SignalEngine::evaluate(&bundle).ok_or(AnalysisError::EmptySeries)?;

    let last = &candles[candles.len() - 1];
    let prev_close = if candles.len() > 1 {
        candles[candles.len() - 2].close
    } else {
        last.close
    };
    let change = last.close - prev_close;
    let price = PriceChange {
        last_close: last.close,
        change,
        change_pct: if prev_close != 0.0 {
            change / prev_close * 100.0
        } else {
            0.0
        },
        last_volume: last.volume,
        timestamp: last.timestamp,
    };

    let risk = stop_loss
        .map(|stop| risk::size_position(config.capital, config.risk_fraction, last.close, stop))
        .transpose()?;

    Ok(AnalysisReport {
        symbol: symbol.to_string(),
        price,
        indicators: bundle,
        levels,
        signals,
        risk,
    })
}
