// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the mean of the first
//          `period` gains / loss magnitudes. The seed RSI value fills ALL of
//          the first `period` output positions (a uniform warm-up region,
//          not a rolling value).
// Step 3 — Apply Wilder's exponential smoothing from index `period` on:
//            up   = (up   * (period - 1) + upval)   / period
//            down = (down * (period - 1) + downval) / period
// Step 4 — RS  = up / down
//          RSI = 100 - 100 / (1 + RS)
//
// Known quirk, kept on purpose: `down == 0` is not guarded. A gains-only
// window gives RS = +inf, which collapses to RSI = 100.0 exactly under IEEE
// arithmetic; a fully flat window gives RS = 0/0 = NaN, which propagates
// through the series.
// =============================================================================

/// Compute the full RSI series for the given `prices` and `period`.
///
/// The output has the same length as the input. The first `period` positions
/// all hold the seed value computed from the first `period` deltas.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `prices.len() < period + 1` => empty vec (need at least `period` deltas)
/// - all-gain input => RSI 100.0 via RS = +inf (not clamped, tested)
/// - constant input => RS = 0/0 => NaN propagates (not clamped, tested)
pub fn rsi(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period + 1 {
        return Vec::new();
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();

    // Seed averages over the first `period` deltas.
    let (sum_up, sum_down) = deltas[..period].iter().fold((0.0_f64, 0.0_f64), |(u, d), &x| {
        if x > 0.0 {
            (u + x, d)
        } else {
            (u, d + x.abs())
        }
    });

    let period_f = period as f64;
    let mut up = sum_up / period_f;
    let mut down = sum_down / period_f;

    let mut out = vec![0.0; prices.len()];
    let seed = 100.0 - 100.0 / (1.0 + up / down);
    for slot in &mut out[..period] {
        *slot = seed;
    }

    // Wilder's smoothing for the remaining positions. Position i consumes
    // delta i - 1 (the deltas series is one shorter than the prices).
    for i in period..prices.len() {
        let delta = deltas[i - 1];
        let (upval, downval) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };

        up = (up * (period_f - 1.0) + upval) / period_f;
        down = (down * (period_f - 1.0) + downval) / period_f;

        out[i] = 100.0 - 100.0 / (1.0 + up / down);
    }

    out
}
