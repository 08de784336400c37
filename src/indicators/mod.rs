pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

use crate::config::AnalysisConfig;
use crate::models::{Candle, IndicatorBundle};

/// Compute every indicator series for one symbol, all aligned to `candles`.
pub fn calculate_bundle(candles: &[Candle], config: &AnalysisConfig) -> IndicatorBundle {
    let bollinger =
        volatility::calculate_bollinger_bands(candles, config.bollinger_period, config.bollinger_k);
    let squeeze = volatility::calculate_squeeze(
        candles,
        &bollinger,
        config.squeeze_atr_period,
        config.squeeze_atr_multiplier,
    );

    IndicatorBundle {
        ema_fast: trend::calculate_ema(candles, config.ema_fast_period),
        ema_slow: trend::calculate_ema(candles, config.ema_slow_period),
        rsi: momentum::calculate_rsi(candles, config.rsi_period),
        macd: momentum::calculate_macd(
            candles,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        ),
        atr: volatility::calculate_atr(candles, config.squeeze_atr_period),
        squeeze,
        bollinger,
        supertrend: structure::calculate_supertrend(
            candles,
            config.supertrend_period,
            config.supertrend_multiplier,
        ),
    }
}
