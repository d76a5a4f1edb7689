#![allow(dead_code)]

use chrono::NaiveDate;
use osctrader::domain::error::OsctraderError;
pub use osctrader::domain::ohlcv::PriceBar;
use osctrader::domain::strategy::StrategyParams;
use osctrader::ports::data_port::DataPort;
use std::cell::RefCell;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
    pub fetch_calls: RefCell<usize>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
            fetch_calls: RefCell::new(0),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, OsctraderError> {
        *self.fetch_calls.borrow_mut() += 1;
        if let Some(reason) = self.errors.get(symbol) {
            return Err(OsctraderError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(symbol).cloned().unwrap_or_default())
    }

    fn list_symbols(&self) -> Result<Vec<String>, OsctraderError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(symbol: &str, date: NaiveDate, close: f64) -> PriceBar {
    PriceBar {
        symbol: symbol.to_string(),
        date,
        open: close,
        high: close + 1.0,
        low: (close - 1.0).max(0.0),
        close,
        volume: 1000,
    }
}

/// Bars with the given closes on consecutive days starting 2024-01-01.
pub fn make_bars(symbol: &str, closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            make_bar(
                symbol,
                date(2024, 1, 1) + chrono::Duration::days(i as i64),
                close,
            )
        })
        .collect()
}

/// Short windows so signal scenarios are easy to engineer: with a 2-bar MA,
/// close > ma is equivalent to an up move on the current bar.
pub fn short_window_params() -> StrategyParams {
    StrategyParams {
        ma_window: 2,
        rsi_window: 3,
        rsi_overbought: 70.0,
        rsi_oversold: 30.0,
    }
}

/// Closes that produce one buy (deep oversold pop at index 3) followed by one
/// sell (overbought dip at index 6) under [`short_window_params`].
pub const BUY_SELL_CLOSES: [f64; 7] = [100.0, 80.0, 60.0, 61.0, 81.0, 101.0, 100.0];
