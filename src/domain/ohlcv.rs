//! OHLCV price bar representation and series validation.

use crate::domain::error::OsctraderError;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Check that `bars` form a usable price series: non-empty, dates strictly
/// increasing, all price fields non-negative and finite.
///
/// Violations are normalized into [`OsctraderError::DataUnavailable`] so callers
/// see a single failure type for any unusable upstream data.
pub fn validate_series(symbol: &str, bars: &[PriceBar]) -> Result<(), OsctraderError> {
    if bars.is_empty() {
        return Err(OsctraderError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: "no rows in requested range".into(),
        });
    }

    for (i, bar) in bars.iter().enumerate() {
        let fields = [bar.open, bar.high, bar.low, bar.close];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) || bar.volume < 0 {
            return Err(OsctraderError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("malformed bar on {}", bar.date),
            });
        }
        if i > 0 && bar.date <= bars[i - 1].date {
            return Err(OsctraderError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("dates not strictly increasing at {}", bar.date),
            });
        }
    }

    Ok(())
}
