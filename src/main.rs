use std::sync::Arc;

use stocklens::analysis;
use stocklens::config::AnalysisConfig;
use stocklens::logging::init_logging;
use stocklens::risk;
use stocklens::screener;
use stocklens::services::{MarketDataProvider, NewsProvider, YahooProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AnalysisConfig::default();
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let symbol = if args.is_empty() {
        "NVDA".to_string()
    } else {
        args.remove(0).to_uppercase()
    };

    let provider = Arc::new(YahooProvider::new()?);
    let candles = provider
        .get_candles(&symbol, &config.history_range, &config.interval)
        .await?;

    let stop_loss = risk::default_stop_loss(&candles);
    let report = analysis::analyze(&symbol, &candles, &config, stop_loss)?;

    println!("Analysis for {}", report.symbol);
    println!(
        "  Price: ${:.2} ({:+.2}, {:+.2}%)  Volume: {:.0}",
        report.price.last_close, report.price.change, report.price.change_pct,
        report.price.last_volume
    );
    println!("  Trend:       {:?}", report.signals.trend);
    println!("  Momentum:    {:?}", report.signals.momentum);
    println!("  Pulse:       {:?}", report.signals.pulse);
    println!("  TrendFollow: {:?}", report.signals.trend_follow);
    println!("  Volatility:  {:?}", report.signals.volatility);

    println!("  Recent levels:");
    for level in report.levels.iter().rev().take(8) {
        println!(
            "    {} {:?} at ${:.2}",
            level.timestamp.date_naive(),
            level.kind,
            level.price
        );
    }

    if let Some(plan) = &report.risk {
        println!("  Trade plan (stop ${:.2}):", plan.stop_loss);
        println!("    Shares:       {}", plan.shares);
        println!("    Exposure:     ${:.2}", plan.dollar_exposure);
        println!("    Max loss:     ${:.2}", plan.max_loss);
        println!("    Take profit:  ${:.2}", plan.take_profit);
    }

    match provider.latest_news(&symbol, 5).await {
        Ok(news) => {
            println!("  Headlines:");
            for item in news {
                println!("    {} ({})", item.title, item.link);
            }
        }
        Err(e) => eprintln!("  News unavailable: {e}"),
    }

    // Any extra symbols on the command line become a watch-list screen.
    if !args.is_empty() {
        let watchlist: Vec<String> = args.iter().map(|s| s.to_uppercase()).collect();
        let hits = screener::scan(provider.clone(), &watchlist, &config).await;

        println!("Screener hits ({} of {} symbols):", hits.len(), watchlist.len());
        for hit in hits {
            println!(
                "  {} at ${:.2} near {:?} ${:.2} ({:.2}% away)",
                hit.symbol,
                hit.price,
                hit.kind,
                hit.level_price,
                hit.distance * 100.0
            );
        }
    }

    Ok(())
}
