//! Market data provider interface.
//!
//! The analysis core is pull-based: it is handed an already-materialized
//! candle series and returns synchronously. Anything that blocks on the
//! network lives behind this trait.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::Candle;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch historical candles for a symbol, ordered by ascending timestamp.
    ///
    /// `range` is how much history to cover (e.g. "2y") and `interval` the
    /// bar spacing (e.g. "1d"), in the provider's own vocabulary.
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, ProviderError>;
}
