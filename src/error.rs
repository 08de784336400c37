//! Error taxonomy for the analysis core and its external collaborators.

use thiserror::Error;

/// Failures surfaced by the analysis core.
///
/// Insufficient history is not an error: indicators degrade to undefined
/// leading entries instead of failing the whole computation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input series has zero bars; nothing can be computed.
    #[error("price series is empty")]
    EmptySeries,

    /// Risk sizing was requested with a stop at or above the entry price.
    #[error("stop loss {stop:.2} must be strictly below the entry price {close:.2}")]
    InvalidStopLoss { close: f64, stop: f64 },
}

/// Failures from the market-data or news collaborators.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("provider returned no data for {symbol}")]
    NoData { symbol: String },

    #[error("malformed provider payload: {0}")]
    Decode(String),
}
