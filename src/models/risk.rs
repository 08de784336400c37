use serde::{Deserialize, Serialize};

/// Position-size recommendation for a long entry at `entry` with a stop below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPlan {
    /// Whole shares to buy; truncated, never rounded up.
    pub shares: u64,
    /// Capital consumed at the entry price.
    pub dollar_exposure: f64,
    /// Loss if the stop is hit.
    pub max_loss: f64,
    /// Target at a fixed 1:2 risk-to-reward ratio.
    pub take_profit: f64,
    pub entry: f64,
    pub stop_loss: f64,
}
