pub mod atr;
pub mod bollinger;
pub mod squeeze;

pub use atr::*;
pub use bollinger::*;
pub use squeeze::*;
