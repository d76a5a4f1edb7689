//! CSV file data adapter.
//!
//! Reads one `<SYMBOL>.csv` file per instrument with a
//! `date,open,high,low,close,volume` header row. Every failure (missing file,
//! malformed row, bad value) is normalized into
//! [`OsctraderError::DataUnavailable`].

use crate::domain::error::OsctraderError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }

    fn unavailable(symbol: &str, reason: String) -> OsctraderError {
        OsctraderError::DataUnavailable {
            symbol: symbol.to_string(),
            reason,
        }
    }

    fn parse_field(
        record: &csv::StringRecord,
        index: usize,
        name: &str,
        symbol: &str,
    ) -> Result<f64, OsctraderError> {
        record
            .get(index)
            .ok_or_else(|| Self::unavailable(symbol, format!("missing {} column", name)))?
            .parse()
            .map_err(|e| Self::unavailable(symbol, format!("invalid {} value: {}", name, e)))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, OsctraderError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| {
            Self::unavailable(symbol, format!("failed to read {}: {}", path.display(), e))
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record =
                result.map_err(|e| Self::unavailable(symbol, format!("CSV parse error: {}", e)))?;

            let date_str = record
                .get(0)
                .ok_or_else(|| Self::unavailable(symbol, "missing date column".into()))?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|e| Self::unavailable(symbol, format!("invalid date format: {}", e)))?;

            if date < start_date || date > end_date {
                continue;
            }

            let open = Self::parse_field(&record, 1, "open", symbol)?;
            let high = Self::parse_field(&record, 2, "high", symbol)?;
            let low = Self::parse_field(&record, 3, "low", symbol)?;
            let close = Self::parse_field(&record, 4, "close", symbol)?;

            let volume: i64 = record
                .get(5)
                .ok_or_else(|| Self::unavailable(symbol, "missing volume column".into()))?
                .parse()
                .map_err(|e| Self::unavailable(symbol, format!("invalid volume value: {}", e)))?;

            bars.push(PriceBar {
                symbol: symbol.to_string(),
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, OsctraderError> {
        let entries = fs::read_dir(&self.base_path).map_err(OsctraderError::Io)?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(OsctraderError::Io)?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
