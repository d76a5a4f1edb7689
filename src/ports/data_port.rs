//! Data access port trait.

use crate::domain::error::OsctraderError;
use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

/// Supplies the price series a backtest runs over. The core never retries or
/// caches these calls; that policy belongs to the caller.
pub trait DataPort {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, OsctraderError>;

    fn list_symbols(&self) -> Result<Vec<String>, OsctraderError>;
}
