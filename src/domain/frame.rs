//! Price series annotated with its derived indicator series.

use crate::domain::indicator::rsi::calculate_rsi;
use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::IndicatorSeries;
use crate::domain::ohlcv::PriceBar;
use crate::domain::strategy::StrategyParams;

/// A bar series plus index-aligned moving-average and RSI series.
///
/// Both indicator series have the same length as `bars`; a value at index i
/// depends only on bars at indices <= i.
#[derive(Debug, Clone)]
pub struct IndicatorFrame {
    pub bars: Vec<PriceBar>,
    pub ma: IndicatorSeries,
    pub rsi: IndicatorSeries,
}

impl IndicatorFrame {
    pub fn build(bars: Vec<PriceBar>, params: &StrategyParams) -> Self {
        let ma = calculate_sma(&bars, params.ma_window);
        let rsi = calculate_rsi(&bars, params.rsi_window);
        IndicatorFrame { bars, ma, rsi }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
