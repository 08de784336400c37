//! News provider interface.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::NewsItem;

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch the latest headlines related to a symbol.
    async fn latest_news(&self, symbol: &str, count: usize)
        -> Result<Vec<NewsItem>, ProviderError>;
}
