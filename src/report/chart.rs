// =============================================================================
// Chart Builder — standalone interactive candlestick chart
// =============================================================================
//
// Builds a self-contained HTML document: plotly.js is loaded from a CDN and
// the traces/layout are embedded as JSON. Three logical axes: price with the
// candlestick trace, the MACD difference as semi-transparent bars on a
// secondary right axis, and the MACD slopes as semi-transparent bars on a
// tertiary right axis.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::market_data::Candle;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Render the chart as a complete HTML document.
pub fn render_chart(candles: &[Candle], diff: &[f64], slopes: &[f64]) -> String {
    let x: Vec<String> = candles.iter().map(|c| c.local_datetime()).collect();

    let traces = json!([
        {
            "type": "candlestick",
            "x": &x,
            "open": candles.iter().map(|c| c.open).collect::<Vec<_>>(),
            "high": candles.iter().map(|c| c.high).collect::<Vec<_>>(),
            "low": candles.iter().map(|c| c.low).collect::<Vec<_>>(),
            "close": candles.iter().map(|c| c.close).collect::<Vec<_>>(),
            "showlegend": false,
        },
        {
            "type": "bar",
            "x": &x,
            "y": diff,
            "name": "MACDAS difference",
            "opacity": 0.3,
            "yaxis": "y2",
        },
        {
            "type": "bar",
            "x": &x,
            "y": slopes,
            "name": "MACDAS slopes",
            "opacity": 0.3,
            "yaxis": "y3",
        },
    ]);

    let layout = json!({
        "title": { "text": "BTC Bitcoin" },
        "xaxis": { "title": "Time" },
        "yaxis": { "title": "Price -  € EUR" },
        "yaxis2": {
            "anchor": "x",
            "overlaying": "y",
            "side": "right",
            "position": 0.15,
        },
        "yaxis3": {
            "anchor": "x",
            "overlaying": "y",
            "side": "right",
            "position": 0.85,
        },
    });

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Candlestick plot</title>
    <script src="{PLOTLY_CDN}"></script>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        html, body {{ height: 100%; }}
        #chart {{ width: 100%; height: 100vh; }}
    </style>
</head>
<body>
    <div id="chart"></div>
    <script>
        Plotly.newPlot("chart", {traces}, {layout}, {{ responsive: true }});
    </script>
</body>
</html>
"##
    )
}

/// Write the chart to `path`, overwriting any existing file.
pub fn write_chart(path: &str, candles: &[Candle], diff: &[f64], slopes: &[f64]) -> Result<()> {
    let html = render_chart(candles, diff, slopes);
    std::fs::write(path, html).with_context(|| format!("failed to write {path}"))?;
    info!(path, "chart exported");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<Candle>, Vec<f64>, Vec<f64>) {
        let candles = vec![
            Candle::new(1_700_000_000, 8.5, 9.5, 9.0, 9.5, 1.0),
            Candle::new(1_700_000_060, 9.0, 10.0, 9.5, 10.0, 2.0),
        ];
        (candles, vec![0.1, 0.2], vec![0.0, 0.1])
    }

    #[test]
    fn chart_is_standalone_html() {
        let (candles, diff, slopes) = sample();
        let html = render_chart(&candles, &diff, &slopes);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot"));
    }

    #[test]
    fn chart_carries_all_three_traces() {
        let (candles, diff, slopes) = sample();
        let html = render_chart(&candles, &diff, &slopes);
        assert!(html.contains(r#""type":"candlestick""#));
        assert!(html.contains("MACDAS difference"));
        assert!(html.contains("MACDAS slopes"));
        assert!(html.contains(r#""yaxis":"y2""#));
        assert!(html.contains(r#""yaxis":"y3""#));
    }

    #[test]
    fn chart_layout_axes() {
        let (candles, diff, slopes) = sample();
        let html = render_chart(&candles, &diff, &slopes);
        assert!(html.contains("BTC Bitcoin"));
        assert!(html.contains(r#""overlaying":"y""#));
        assert!(html.contains(r#""position":0.15"#));
        assert!(html.contains(r#""position":0.85"#));
    }
}
