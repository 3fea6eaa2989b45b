// =============================================================================
// Report Builder Module
// =============================================================================
//
// Orchestrates one pipeline run: fetch the candle series, compute the MACD
// difference and its slopes on the close column, export the combined table
// to CSV and render the candlestick chart to a standalone HTML file.

pub mod chart;
pub mod csv_export;

use anyhow::Result;
use tracing::info;

use crate::coinbase::{self, CoinbaseClient};
use crate::indicators::{macd, pair_slopes, FAST_PERIOD, SLOW_PERIOD};
use crate::market_data::Granularity;

/// Fixed CSV export path, overwritten on every run.
pub const CSV_PATH: &str = "Candle_df.csv";
/// Fixed chart export path, overwritten on every run.
pub const CHART_PATH: &str = "Candlestick plot.html";

/// Run the full pipeline with the default window (last five hours, 1-minute
/// candles). Side effects are the two output files.
pub async fn run(client: &CoinbaseClient) -> Result<()> {
    let (start, end) = coinbase::default_window();
    info!(%start, %end, granularity = %Granularity::OneMinute, "fetching candles");

    let candles = client
        .get_candles(&start, &end, Granularity::OneMinute)
        .await?;
    anyhow::ensure!(
        candles.len() > SLOW_PERIOD,
        "got {} candles, need more than {} for the slow EMA",
        candles.len(),
        SLOW_PERIOD
    );
    info!(count = candles.len(), "candle series retrieved");

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let m = macd(&closes, SLOW_PERIOD, FAST_PERIOD);
    let slopes = pair_slopes(&m.diff);

    csv_export::write_csv(CSV_PATH, &candles, &m.diff, &slopes)?;
    chart::write_chart(CHART_PATH, &candles, &m.diff, &slopes)?;

    info!(csv = CSV_PATH, chart = CHART_PATH, "report complete");
    Ok(())
}
