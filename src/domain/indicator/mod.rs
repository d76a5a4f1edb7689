//! Technical indicator implementations.
//!
//! Indicator series are aligned index-for-index with the bar series they are
//! derived from. A point's `valid` flag is false while the indicator has
//! insufficient history (warmup) or is undefined at that index.

pub mod rsi;
pub mod sma;

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Rsi(usize),
}

#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// The indicator value at `index`, or `None` when the point is out of
    /// range or not valid at that index.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        let point = self.values.get(index)?;
        point.valid.then_some(point.value)
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(window) => write!(f, "SMA({})", window),
            IndicatorType::Rsi(window) => write!(f, "RSI({})", window),
        }
    }
}
