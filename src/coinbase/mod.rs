// =============================================================================
// Coinbase Exchange Module
// =============================================================================
//
// REST client for the public candle endpoint. All endpoints used here are
// unauthenticated market data.

pub mod client;

pub use client::{default_window, parse_candles, CoinbaseClient};
