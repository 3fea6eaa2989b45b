// =============================================================================
// Candle — OHLCV record and interval enumeration
// =============================================================================

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// A single OHLCV candle from the exchange candle endpoint.
///
/// `time` is the bucket start in UNIX epoch seconds. A retrieved series is
/// ordered by `time` ascending and unique per timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub low: f64,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(time: i64, low: f64, high: f64, open: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            low,
            high,
            open,
            close,
            volume,
        }
    }

    /// Render the bucket start as a local-time string (`YYYY-MM-DD HH:MM:SS`).
    ///
    /// Falls back to the raw epoch value for timestamps outside chrono's
    /// representable range.
    pub fn local_datetime(&self) -> String {
        Local
            .timestamp_opt(self.time, 0)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| self.time.to_string())
    }
}

/// Candle interval length. The exchange rejects any value outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    SixHours,
    OneDay,
}

impl Granularity {
    /// Interval length in seconds, as sent in the `granularity` query param.
    pub fn as_secs(self) -> u64 {
        match self {
            Self::OneMinute => 60,
            Self::FiveMinutes => 300,
            Self::FifteenMinutes => 900,
            Self::OneHour => 3600,
            Self::SixHours => 21600,
            Self::OneDay => 86400,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self::OneMinute
    }
}

impl TryFrom<u64> for Granularity {
    type Error = anyhow::Error;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        match secs {
            60 => Ok(Self::OneMinute),
            300 => Ok(Self::FiveMinutes),
            900 => Ok(Self::FifteenMinutes),
            3600 => Ok(Self::OneHour),
            21600 => Ok(Self::SixHours),
            86400 => Ok(Self::OneDay),
            other => anyhow::bail!(
                "invalid granularity {other}: must be one of 60, 300, 900, 3600, 21600, 86400"
            ),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneMinute => write!(f, "1m"),
            Self::FiveMinutes => write!(f, "5m"),
            Self::FifteenMinutes => write!(f, "15m"),
            Self::OneHour => write!(f, "1h"),
            Self::SixHours => write!(f, "6h"),
            Self::OneDay => write!(f, "1d"),
        }
    }
}
