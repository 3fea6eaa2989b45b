// =============================================================================
// Market Data Module
// =============================================================================
//
// The candle record and the fixed set of candle intervals the exchange
// accepts.

pub mod candle;

// Re-export for convenient access (e.g. `use crate::market_data::Candle`).
pub use candle::{Candle, Granularity};
