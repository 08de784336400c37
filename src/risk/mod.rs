//! Position sizing against a stop-loss.

use crate::error::AnalysisError;
use crate::models::{Candle, RiskPlan};

/// Size a long position from capital, risk tolerance and a stop price.
///
/// shares = floor(capital * risk_fraction / (close - stop)); the take-profit
/// sits at a fixed 1:2 risk-to-reward. Fails when the stop is not strictly
/// below the entry price; the caller decides what to do, nothing is clamped.
pub fn size_position(
    capital: f64,
    risk_fraction: f64,
    close: f64,
    stop_loss: f64,
) -> Result<RiskPlan, AnalysisError> {
    let risk_per_share = close - stop_loss;
    if risk_per_share <= 0.0 {
        return Err(AnalysisError::InvalidStopLoss {
            close,
            stop: stop_loss,
        });
    }

    let risk_amount = capital * risk_fraction;
    let shares = (risk_amount / risk_per_share).floor() as u64;

    Ok(RiskPlan {
        shares,
        dollar_exposure: shares as f64 * close,
        max_loss: risk_amount,
        take_profit: close + 2.0 * risk_per_share,
        entry: close,
        stop_loss,
    })
}

/// Suggested default stop: 3% under the most recent low.
pub fn default_stop_loss(candles: &[Candle]) -> Option<f64> {
    candles.last().map(|c| c.low * 0.97)
}
