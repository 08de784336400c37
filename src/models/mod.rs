//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod level;
pub mod news;
pub mod risk;
pub mod signal;

pub use candle::Candle;
pub use indicators::{BollingerSeries, IndicatorBundle, MacdSeries, PriceChange, SupertrendSeries};
pub use level::{Level, LevelKind};
pub use news::NewsItem;
pub use risk::RiskPlan;
pub use signal::{
    MomentumState, PulseState, SignalSummary, TrendFollowState, TrendState, VolatilityState,
};
