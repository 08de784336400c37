pub mod market_data;
pub mod news;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use news::NewsProvider;
pub use yahoo::YahooProvider;
