//! Yahoo Finance provider implementation
//!
//! Speaks the public chart and search JSON endpoints. Transient transport
//! failures are retried with exponential backoff before surfacing as a
//! `ProviderError`.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::messages::{ChartResponse, SearchResponse};
use crate::error::ProviderError;
use crate::models::{Candle, NewsItem};
use crate::services::market_data::MarketDataProvider;
use crate::services::news::NewsProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = concat!("stocklens/", env!("CARGO_PKG_VERSION"));

pub struct YahooProvider {
    client: Client,
    base_url: Url,
}

impl YahooProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: &str) -> Result<Self, ProviderError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        let request = || async { self.client.get(url.clone()).send().await };
        let response = request
            .retry(ExponentialBuilder::default().with_max_times(3))
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, ProviderError> {
        let mut url = self.base_url.join(&format!("v8/finance/chart/{symbol}"))?;
        url.query_pairs_mut()
            .append_pair("range", range)
            .append_pair("interval", interval)
            .append_pair("includePrePost", "false");

        let payload: ChartResponse = self.get_json(url).await?;
        let result = payload
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| ProviderError::NoData {
                symbol: symbol.to_string(),
            })?;

        if result.timestamp.is_empty() {
            return Err(ProviderError::NoData {
                symbol: symbol.to_string(),
            });
        }

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode("chart payload has no quote columns".into()))?;

        let mut candles = Vec::with_capacity(result.timestamp.len());
        for (i, &ts) in result.timestamp.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            // Rows with any missing field (halted/partial sessions) are skipped.
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
                let timestamp = DateTime::from_timestamp(ts, 0)
                    .ok_or_else(|| ProviderError::Decode(format!("invalid timestamp {ts}")))?;
                candles.push(Candle::new(open, high, low, close, volume, timestamp));
            }
        }

        debug!(symbol = %symbol, bars = candles.len(), "fetched candle history");
        Ok(candles)
    }
}

#[async_trait]
impl NewsProvider for YahooProvider {
    async fn latest_news(
        &self,
        symbol: &str,
        count: usize,
    ) -> Result<Vec<NewsItem>, ProviderError> {
        let mut url = self.base_url.join("v1/finance/search")?;
        url.query_pairs_mut()
            .append_pair("q", symbol)
            .append_pair("newsCount", &count.to_string())
            .append_pair("quotesCount", "0");

        let payload: SearchResponse = self.get_json(url).await?;
        let items = payload
            .news
            .into_iter()
            .map(|news| NewsItem {
                title: news.title,
                link: news.link,
                publisher: news.publisher,
                published_at: news
                    .provider_publish_time
                    .and_then(|t| DateTime::from_timestamp(t, 0)),
                related_symbols: news.related_tickers,
            })
            .collect();

        Ok(items)
    }
}
