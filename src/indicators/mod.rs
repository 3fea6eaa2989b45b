// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free transformations over an ordered sequence of closing
// prices. Output lengths are deterministic per function: RSI, EMA, MACD and
// pair_slopes keep the input length (with defined warm-up regions), SMA uses
// valid-convolution semantics and is shorter by `window - 1`.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod slope;
pub mod sma;

pub use ema::ema;
pub use macd::{macd, Macd, FAST_PERIOD, SLOW_PERIOD};
pub use rsi::rsi;
pub use slope::pair_slopes;
pub use sma::sma;
