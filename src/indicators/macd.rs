// =============================================================================
// Moving Average Convergence/Divergence (MACD)
// =============================================================================
//
// MACD = EMA(fast) - EMA(slow), pointwise. All three series keep the input
// length (the EMA warm-up plateau included).

use super::ema::ema;

/// Default slow EMA window.
pub const SLOW_PERIOD: usize = 26;
/// Default fast EMA window.
pub const FAST_PERIOD: usize = 12;

/// The three MACD series, each aligned 1:1 with the input prices.
#[derive(Debug, Clone, Default)]
pub struct Macd {
    pub ema_slow: Vec<f64>,
    pub ema_fast: Vec<f64>,
    pub diff: Vec<f64>,
}

/// Compute MACD over `prices` with the given `slow` and `fast` EMA windows.
///
/// Returns empty series when the input is too short for the slow window
/// (`prices.len() <= slow`).
pub fn macd(prices: &[f64], slow: usize, fast: usize) -> Macd {
    let ema_slow = ema(prices, slow);
    let ema_fast = ema(prices, fast);

    if ema_slow.is_empty() || ema_fast.is_empty() {
        return Macd::default();
    }

    let diff = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    Macd {
        ema_slow,
        ema_fast,
        diff,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_too_short_input() {
        let prices: Vec<f64> = (1..=26).map(|x| x as f64).collect();
        let m = macd(&prices, SLOW_PERIOD, FAST_PERIOD);
        assert!(m.ema_slow.is_empty());
        assert!(m.ema_fast.is_empty());
        assert!(m.diff.is_empty());
    }

    #[test]
    fn macd_series_lengths() {
        let prices: Vec<f64> = (1..=60).map(|x| (x as f64).sqrt() * 100.0).collect();
        let m = macd(&prices, SLOW_PERIOD, FAST_PERIOD);
        assert_eq!(m.ema_slow.len(), prices.len());
        assert_eq!(m.ema_fast.len(), prices.len());
        assert_eq!(m.diff.len(), prices.len());
    }

    #[test]
    fn macd_matches_independent_weighted_averages() {
        // 30 known closes; both EMAs checked against directly computed
        // exponential weights (no convolution machinery involved), then the
        // difference.
        let closes: Vec<f64> = vec![
            100.0, 101.2, 100.8, 102.5, 103.1, 102.0, 101.5, 102.8, 104.0, 103.6, 105.2, 104.9,
            106.1, 105.5, 107.0, 106.4, 108.2, 107.8, 109.5, 108.9, 110.1, 109.6, 111.3, 110.8,
            112.0, 111.4, 113.2, 112.7, 114.5, 113.9,
        ];
        let m = macd(&closes, 26, 12);

        let weights = |window: usize| -> Vec<f64> {
            let step = 1.0 / (window as f64 - 1.0);
            let raw: Vec<f64> = (0..window).map(|i| (-1.0 + step * i as f64).exp()).collect();
            let sum: f64 = raw.iter().sum();
            raw.into_iter().map(|w| w / sum).collect()
        };

        for (window, series) in [(26usize, &m.ema_slow), (12usize, &m.ema_fast)] {
            let w = weights(window);
            for k in window..closes.len() {
                // Flipped-kernel convolution: trailing window, most recent
                // sample paired with the smallest weight.
                let expected: f64 = (0..window).map(|j| closes[k - j] * w[j]).sum();
                assert!(
                    (series[k] - expected).abs() < 1e-9,
                    "window {window}, index {k}: got {}, expected {expected}",
                    series[k]
                );
            }
        }

        for i in 0..closes.len() {
            assert!((m.diff[i] - (m.ema_fast[i] - m.ema_slow[i])).abs() < 1e-9);
        }
    }
}
