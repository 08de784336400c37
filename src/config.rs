//! Runtime configuration
//!
//! Every engine parameter the sidebar used to hold is an explicit value here;
//! nothing in the core reads process-wide state.

use serde::Deserialize;

/// Returns the current environment name (defaults to "sandbox").
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Parameters for the indicator engine, level detector, classifier, risk
/// sizer and screener.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Trend EMA pair (fast, slow).
    pub ema_fast_period: usize,
    pub ema_slow_period: usize,
    pub rsi_period: usize,
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    pub bollinger_period: usize,
    pub bollinger_k: f64,
    pub supertrend_period: usize,
    pub supertrend_multiplier: f64,
    /// ATR window backing the Keltner-style squeeze channel.
    pub squeeze_atr_period: usize,
    pub squeeze_atr_multiplier: f64,
    /// Half-width of the centered window used for level detection.
    pub level_window: usize,
    /// Relative distance below which the screener flags a symbol.
    pub screener_threshold: f64,
    /// How many of the most recent levels the screener compares against.
    pub screener_lookback: usize,
    /// Parallel symbol fetches during a scan.
    pub screener_concurrency: usize,
    pub capital: f64,
    pub risk_fraction: f64,
    /// How much history the provider is asked for (e.g. "2y").
    pub history_range: String,
    /// Bar interval requested from the provider (e.g. "1d", "1h").
    pub interval: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ema_fast_period: 50,
            ema_slow_period: 200,
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_k: 2.0,
            supertrend_period: 7,
            supertrend_multiplier: 3.0,
            squeeze_atr_period: 20,
            squeeze_atr_multiplier: 1.5,
            level_window: 20,
            screener_threshold: 0.02,
            screener_lookback: 5,
            screener_concurrency: 4,
            capital: 10_000.0,
            risk_fraction: 0.02,
            history_range: "2y".to_string(),
            interval: "1d".to_string(),
        }
    }
}
