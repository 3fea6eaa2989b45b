// =============================================================================
// Coinbase Exchange REST API Client — public candle endpoint
// =============================================================================
//
// One GET per run against /products/BTC-EUR/candles/ with `start`, `end`
// (ISO-8601) and `granularity` (seconds) query parameters. The response is a
// JSON array of [time, low, high, open, close, volume] arrays, newest bucket
// first; the parser reorders ascending and deduplicates by timestamp.
//
// No retry and no request timeout: any transport or shape failure surfaces
// to the caller and ends the run.
// =============================================================================

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use tracing::debug;

use crate::market_data::{Candle, Granularity};

/// The one trading pair this pipeline reports on.
const PRODUCT: &str = "BTC-EUR";

/// How far back the default request window reaches.
const DEFAULT_WINDOW_HOURS: i64 = 5;

/// Coinbase Exchange REST client (public market data only).
#[derive(Debug, Clone)]
pub struct CoinbaseClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for CoinbaseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinbaseClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.exchange.coinbase.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// GET /products/BTC-EUR/candles/ for the given window and granularity.
    ///
    /// `start` and `end` are ISO-8601 timestamps. The returned candles are
    /// ordered by time ascending.
    pub async fn get_candles(
        &self,
        start: &str,
        end: &str,
        granularity: Granularity,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/products/{}/candles/", self.base_url, PRODUCT);
        let gran = granularity.as_secs().to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[("start", start), ("end", end), ("granularity", gran.as_str())])
            .send()
            .await
            .context("GET /products/.../candles request failed")?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse candles response")?;

        if !status.is_success() {
            anyhow::bail!("Coinbase GET /products/{PRODUCT}/candles returned {status}: {body}");
        }

        let candles = parse_candles(&body)?;
        debug!(
            product = PRODUCT,
            granularity = %granularity,
            count = candles.len(),
            "candles fetched"
        );
        Ok(candles)
    }
}

/// Default request window, computed at call time: now minus five hours to
/// now, as local ISO-8601 strings.
pub fn default_window() -> (String, String) {
    let now = Local::now().naive_local();
    let start = now - Duration::hours(DEFAULT_WINDOW_HOURS);
    (
        start.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        now.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
    )
}

/// Reshape the array-of-arrays candle response into an ascending series.
///
/// Field order on the wire: [time, low, high, open, close, volume]. Values
/// may arrive as numbers or numeric strings. Entries sharing a timestamp are
/// collapsed to the first one seen.
pub fn parse_candles(body: &serde_json::Value) -> Result<Vec<Candle>> {
    let raw = body.as_array().context("candles response is not an array")?;

    let mut candles = Vec::with_capacity(raw.len());
    for entry in raw {
        let arr = entry.as_array().context("candle entry is not an array")?;
        if arr.len() < 6 {
            anyhow::bail!("candle entry has {} elements, expected 6", arr.len());
        }

        let time = arr[0]
            .as_i64()
            .or_else(|| arr[0].as_f64().map(|f| f as i64))
            .context("candle time is not a number")?;
        let low = parse_num(&arr[1])?;
        let high = parse_num(&arr[2])?;
        let open = parse_num(&arr[3])?;
        let close = parse_num(&arr[4])?;
        let volume = parse_num(&arr[5])?;

        candles.push(Candle::new(time, low, high, open, close, volume));
    }

    // The API returns newest-first; the series contract is ascending and
    // unique per timestamp.
    candles.sort_by_key(|c| c.time);
    candles.dedup_by_key(|c| c.time);

    Ok(candles)
}

/// Parse a JSON value that may be either a string or a number into `f64`.
fn parse_num(val: &serde_json::Value) -> Result<f64> {
    if let Some(n) = val.as_f64() {
        Ok(n)
    } else if let Some(s) = val.as_str() {
        s.parse::<f64>()
            .with_context(|| format!("failed to parse '{s}' as f64"))
    } else {
        anyhow::bail!("expected string or number, got: {val}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_three_candles_ascending() {
        // Newest-first, as the API sends them.
        let body = json!([
            [1_700_000_120, 9.5, 10.5, 10.0, 10.2, 3.0],
            [1_700_000_060, 9.0, 10.0, 9.5, 10.0, 2.0],
            [1_700_000_000, 8.5, 9.5, 9.0, 9.5, 1.0],
        ]);
        let candles = parse_candles(&body).unwrap();
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[0].time, 1_700_000_000);
        assert_eq!(candles[2].time, 1_700_000_120);
        // Field order: [time, low, high, open, close, volume].
        assert_eq!(candles[0].low, 8.5);
        assert_eq!(candles[0].high, 9.5);
        assert_eq!(candles[0].open, 9.0);
        assert_eq!(candles[0].close, 9.5);
        assert_eq!(candles[0].volume, 1.0);
        // Each row renders a well-formed local timestamp.
        for c in &candles {
            assert_eq!(c.local_datetime().len(), 19);
        }
    }

    #[test]
    fn parse_accepts_numeric_strings() {
        let body = json!([[1_700_000_000, "8.5", "9.5", "9.0", "9.5", "1.25"]]);
        let candles = parse_candles(&body).unwrap();
        assert_eq!(candles[0].close, 9.5);
        assert_eq!(candles[0].volume, 1.25);
    }

    #[test]
    fn parse_deduplicates_timestamps() {
        let body = json!([
            [1_700_000_000, 1.0, 2.0, 1.5, 1.8, 1.0],
            [1_700_000_000, 1.1, 2.1, 1.6, 1.9, 2.0],
        ]);
        let candles = parse_candles(&body).unwrap();
        assert_eq!(candles.len(), 1);
    }

    #[test]
    fn parse_rejects_non_array_body() {
        let body = json!({"message": "NotFound"});
        assert!(parse_candles(&body).is_err());
    }

    #[test]
    fn parse_rejects_short_entry() {
        let body = json!([[1_700_000_000, 1.0, 2.0]]);
        assert!(parse_candles(&body).is_err());
    }

    #[test]
    fn parse_empty_body_is_empty_series() {
        let candles = parse_candles(&json!([])).unwrap();
        assert!(candles.is_empty());
    }

    #[test]
    fn default_window_is_iso_ordered() {
        let (start, end) = default_window();
        // ISO-8601 strings compare chronologically.
        assert!(start < end);
        assert!(start.contains('T'));
    }
}
