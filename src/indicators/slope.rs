// =============================================================================
// Pair Slopes — first difference with a zero prefix
// =============================================================================
//
// The discrete derivative of a series, prefixed with a single 0.0 so the
// output keeps the input length. Applied to the MACD difference it acts as a
// momentum-of-momentum signal.

/// First differences of `series`, zero-prefixed.
///
/// `out[0] == 0.0`, `out[i] == series[i] - series[i - 1]` for i > 0; the
/// output length equals the input length. Empty input gives empty output.
pub fn pair_slopes(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(series.len());
    out.push(0.0);
    out.extend(series.windows(2).map(|w| w[1] - w[0]));
    out
}
