//! Backtest orchestration.
//!
//! One invocation owns its series, frame, and trade log exclusively; nothing
//! is shared between runs, so independent backtests may run concurrently as
//! long as the data port is safe for concurrent calls.

use chrono::NaiveDate;

use crate::domain::error::OsctraderError;
use crate::domain::frame::IndicatorFrame;
use crate::domain::metrics::PerformanceMetrics;
use crate::domain::ohlcv;
use crate::domain::signal::walk_signals;
use crate::domain::strategy::StrategyParams;
use crate::ports::data_port::DataPort;

/// What to backtest: one symbol over one date range.
#[derive(Debug, Clone)]
pub struct BacktestRequest {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Run one backtest: fetch the series, compute indicators, walk the signal
/// engine, reduce the trade log to metrics.
///
/// Parameters are validated before any data is touched. Any stage failure
/// short-circuits with no partial metrics. A series too short for the
/// indicator windows is not a failure: the engine never transitions and the
/// zero-metrics record comes back.
pub fn run_backtest(
    data_port: &dyn DataPort,
    symbol: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    params: &StrategyParams,
) -> Result<PerformanceMetrics, OsctraderError> {
    params.validate()?;

    let bars = data_port.fetch_ohlcv(symbol, start_date, end_date)?;
    ohlcv::validate_series(symbol, &bars)?;

    let frame = IndicatorFrame::build(bars, params);
    let trade_log = walk_signals(&frame, params)?;

    Ok(PerformanceMetrics::compute(trade_log))
}
