// =============================================================================
// candleplot — Main Entry Point
// =============================================================================
//
// One pipeline run: fetch the last five hours of BTC-EUR 1-minute candles,
// compute the MACD difference and its slopes, write Candle_df.csv and the
// interactive candlestick chart, then exit. No flags, no arguments.
// =============================================================================

use tracing_subscriber::EnvFilter;

use candleplot::coinbase::CoinbaseClient;
use candleplot::report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = CoinbaseClient::new();
    report::run(&client).await
}
