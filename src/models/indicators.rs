use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram, aligned to the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Bollinger Bands, aligned to the input series. Entries are `None` until a
/// full rolling window has accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Supertrend trailing-stop line with its directional state.
///
/// `direction` is +1 (uptrend) or -1 (downtrend) at every index; the line
/// itself is undefined until the ATR band exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupertrendSeries {
    pub line: Vec<Option<f64>>,
    pub direction: Vec<i8>,
}

/// Every derived indicator series for one symbol, all index-aligned to the
/// input candle series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub rsi: Vec<Option<f64>>,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
    pub atr: Vec<Option<f64>>,
    pub squeeze: Vec<Option<bool>>,
    pub supertrend: SupertrendSeries,
}

/// Last close against the previous close, for the report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub last_close: f64,
    pub change: f64,
    pub change_pct: f64,
    pub last_volume: f64,
    pub timestamp: DateTime<Utc>,
}
