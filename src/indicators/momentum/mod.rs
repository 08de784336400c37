pub mod macd;
pub mod rsi;

pub use macd::*;
pub use rsi::*;
