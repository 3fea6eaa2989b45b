// =============================================================================
// candleplot — candle retrieval, indicator math, CSV + chart export
// =============================================================================
//
// Library surface for the pipeline binary and the test suite. The indicator
// module is pure math; coinbase and report are the thin I/O around it.

pub mod coinbase;
pub mod indicators;
pub mod market_data;
pub mod report;
