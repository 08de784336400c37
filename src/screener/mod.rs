//! Watch-list screener
//!
//! Batch variant of the per-symbol engine: fetches each symbol's own series,
//! detects its levels, and flags symbols whose current price sits within a
//! threshold distance of a recent level. Per-symbol failures are isolated so
//! one bad symbol never aborts the scan; abandoning the scan future leaves
//! already-collected results untouched.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::error::ProviderError;
use crate::indicators::structure::detect_levels;
use crate::models::LevelKind;
use crate::services::MarketDataProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerHit {
    pub symbol: String,
    pub price: f64,
    pub kind: LevelKind,
    pub level_price: f64,
    /// Relative distance |close - level| / close.
    pub distance: f64,
}

/// Scan a watch-list for symbols trading near a structural level.
///
/// Symbols are fetched as independent tasks with bounded concurrency (the
/// provider may be rate-limited upstream). Result order follows completion,
/// not input order; symbol identity is carried on each hit.
pub async fn scan(
    provider: Arc<dyn MarketDataProvider>,
    symbols: &[String],
    config: &AnalysisConfig,
) -> Vec<ScreenerHit> {
    stream::iter(symbols.iter().cloned())
        .map(|symbol| {
            let provider = Arc::clone(&provider);
            let config = config.clone();
            async move {
                match scan_symbol(provider.as_ref(), &symbol, &config).await {
                    Ok(hit) => hit,
                    Err(e) => {
                        warn!(symbol = %symbol, error = %e, "screener: skipping symbol");
                        None
                    }
                }
            }
        })
        .buffer_unordered(config.screener_concurrency.max(1))
        .filter_map(|hit| async move { hit })
        .collect()
        .await
}

async fn scan_symbol(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    config: &AnalysisConfig,
) -> Result<Option<ScreenerHit>, ProviderError> {
    let candles = provider
        .get_candles(symbol, &config.history_range, &config.interval)
        .await?;

    let Some(last) = candles.last() else {
        return Err(ProviderError::NoData {
            symbol: symbol.to_string(),
        });
    };
    let current = last.close;
    if current == 0.0 {
        warn!(symbol = %symbol, "screener: zero last close, skipping symbol");
        return Ok(None);
    }

    let levels = detect_levels(&candles, config.level_window);
    debug!(symbol = %symbol, levels = levels.len(), "screener: levels detected");

    let nearest = levels
        .iter()
        .rev()
        .take(config.screener_lookback)
        .map(|level| (level, (current - level.price).abs() / current))
        .filter(|(_, distance)| *distance <= config.screener_threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    Ok(nearest.map(|(level, distance)| ScreenerHit {
        symbol: symbol.to_string(),
        price: current,
        kind: level.kind,
        level_price: level.price,
        distance,
    }))
}
