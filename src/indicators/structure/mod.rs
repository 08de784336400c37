pub mod levels;
pub mod supertrend;

pub use levels::*;
pub use supertrend::*;
