// =============================================================================
// CSV Export — the combined candle/indicator table
// =============================================================================
//
// One row per candle with a leading integer index, raw candle fields, the
// local timestamp string, and the two derived MACD columns. The column order
// matches the table this pipeline has always exported.

use anyhow::{Context, Result};
use tracing::info;

use crate::market_data::Candle;

const HEADER: &str = ",close,high,low,open,volume,datetime,MACDAS_diff,MACDAS_slopes";

/// Render the full table as CSV text.
///
/// `diff` and `slopes` must be aligned 1:1 with `candles`.
pub fn render_csv(candles: &[Candle], diff: &[f64], slopes: &[f64]) -> String {
    debug_assert_eq!(candles.len(), diff.len());
    debug_assert_eq!(candles.len(), slopes.len());

    let mut out = String::with_capacity(64 * (candles.len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for (i, c) in candles.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            i,
            c.close,
            c.high,
            c.low,
            c.open,
            c.volume,
            c.local_datetime(),
            diff[i],
            slopes[i],
        ));
    }

    out
}

/// Write the table to `path`, overwriting any existing file.
pub fn write_csv(path: &str, candles: &[Candle], diff: &[f64], slopes: &[f64]) -> Result<()> {
    let csv = render_csv(candles, diff, slopes);
    std::fs::write(path, csv).with_context(|| format!("failed to write {path}"))?;
    info!(path, rows = candles.len(), "CSV exported");
    Ok(())
}
