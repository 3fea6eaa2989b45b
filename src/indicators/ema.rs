// =============================================================================
// Exponential Moving Average (EMA) — decaying convolution kernel
// =============================================================================
//
// The kernel samples exp(x) at `window` evenly spaced points over [-1, 0]
// and normalises the samples to sum to 1. The input is convolved with the
// kernel in "full" mode and the result truncated to the input length, after
// which the first `window` positions are overwritten with the value at index
// `window` so the warm-up region is a flat plateau instead of partial-window
// artifacts.
//
// Known quirk, kept on purpose: convolution flips the kernel, so within each
// window the most recent sample receives the *smallest* weight. Together
// with the flat plateau this reproduces the series this pipeline has always
// produced; do not "fix" either without recalibrating everything downstream.
// =============================================================================

/// Exponential kernel: `window` samples of exp over [-1, 0], sum-normalised.
fn exp_kernel(window: usize) -> Vec<f64> {
    let step = if window > 1 {
        1.0 / (window as f64 - 1.0)
    } else {
        0.0
    };
    let mut kernel: Vec<f64> = (0..window)
        .map(|i| (-1.0 + step * i as f64).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Compute the EMA of `values` with the given `window`.
///
/// Output length equals the input length; the first `window` entries all
/// equal the entry at index `window` (flat warm-up plateau).
///
/// # Edge cases
/// - `window == 0` => empty vec
/// - `window >= values.len()` => empty vec (no settled value to plateau on)
/// - `window == 1` degenerates to the identity kernel
pub fn ema(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window >= values.len() {
        return Vec::new();
    }

    let kernel = exp_kernel(window);
    let n = values.len();

    // Full convolution, truncated to the first n outputs:
    //   out[k] = sum_i values[i] * kernel[k - i]
    let mut out = vec![0.0; n];
    for (k, slot) in out.iter_mut().enumerate() {
        let lo = (k + 1).saturating_sub(window);
        let mut acc = 0.0;
        for i in lo..=k {
            acc += values[i] * kernel[k - i];
        }
        *slot = acc;
    }

    // Flatten the warm-up region.
    let plateau = out[window];
    for slot in &mut out[..window] {
        *slot = plateau;
    }

    out
}
