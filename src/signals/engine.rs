//! Signal classification engine
//!
//! Reduces the latest indicator values into discrete human-readable states.
//! Pure function of the last two bars of the bundle; no history is kept
//! between evaluations.

use crate::models::{
    IndicatorBundle, MomentumState, PulseState, SignalSummary, TrendFollowState, TrendState,
    VolatilityState,
};

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate one state per label from the bundle's most recent values.
    ///
    /// Returns `None` only for an empty bundle. Indicators still inside their
    /// warm-up window classify as their neutral state.
    pub fn evaluate(bundle: &IndicatorBundle) -> Option<SignalSummary> {
        let last = bundle.ema_fast.len().checked_sub(1)?;

        let trend = if bundle.ema_fast[last] > bundle.ema_slow[last] {
            TrendState::Bullish
        } else {
            TrendState::Bearish
        };

        // Boundaries are exclusive: exactly 70 or 30 stays Neutral.
        let momentum = match bundle.rsi[last] {
            Some(rsi) if rsi > 70.0 => MomentumState::Overbought,
            Some(rsi) if rsi < 30.0 => MomentumState::Oversold,
            _ => MomentumState::Neutral,
        };

        // StrongBuy only on the histogram crossing from <= 0 to > 0 between
        // the previous and current bar.
        let pulse = match last.checked_sub(1) {
            Some(prev)
                if bundle.macd.histogram[last] > 0.0 && bundle.macd.histogram[prev] <= 0.0 =>
            {
                PulseState::StrongBuy
            }
            _ => PulseState::Neutral,
        };

        let trend_follow = if bundle.supertrend.direction[last] > 0 {
            TrendFollowState::BuyMode
        } else {
            TrendFollowState::SellMode
        };

        let volatility = if bundle.squeeze[last] == Some(true) {
            VolatilityState::Squeezing
        } else {
            VolatilityState::NoSqueeze
        };

        Some(SignalSummary {
            trend,
            momentum,
            pulse,
            trend_follow,
            volatility,
        })
    }
}
