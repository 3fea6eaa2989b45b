// =============================================================================
// Simple Moving Average (SMA) — valid convolution
// =============================================================================
//
// Uniform kernel of size `window`, each weight 1/window, with "valid"
// alignment: no padding, so the output is shorter than the input by
// `window - 1`.

/// Compute the SMA of `values` with the given `window`.
///
/// Output length is `values.len() - window + 1`; element i is the mean of
/// `values[i..i + window]`.
///
/// # Edge cases
/// - `window == 0` => empty vec
/// - `window > values.len()` => empty vec (no full window fits)
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }

    let weight = 1.0 / window as f64;
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() * weight)
        .collect()
}
