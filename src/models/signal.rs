use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendState {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumState {
    Overbought,
    Oversold,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PulseState {
    StrongBuy,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendFollowState {
    BuyMode,
    SellMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityState {
    Squeezing,
    NoSqueeze,
}

/// Discrete read of the latest indicator values, one state per label.
///
/// Recomputed fresh from the last two bars on every evaluation; nothing here
/// is persisted or carried between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub trend: TrendState,
    pub momentum: MomentumState,
    pub pulse: PulseState,
    pub trend_follow: TrendFollowState,
    pub volatility: VolatilityState,
}
