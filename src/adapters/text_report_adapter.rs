//! Plain-text report adapter implementing ReportPort.

use std::fmt::Write as _;
use std::fs;

use crate::domain::error::OsctraderError;
use crate::domain::metrics::PerformanceMetrics;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Render the metrics record and trade log as a plain-text summary.
    pub fn render(symbol: &str, metrics: &PerformanceMetrics) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "backtest report: {}", symbol);
        let _ = writeln!(out, "  total return:  {:>8.2}%", metrics.total_return * 100.0);
        let _ = writeln!(out, "  sharpe ratio:  {:>8.4}", metrics.sharpe_ratio);
        let _ = writeln!(out, "  max drawdown:  {:>8.2}%", metrics.max_drawdown * 100.0);
        let _ = writeln!(out, "  win rate:      {:>8.2}%", metrics.win_rate * 100.0);
        let _ = writeln!(out, "  trade events:  {:>8}", metrics.trade_log.len());

        if !metrics.trade_log.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {:<12} {:<5} {:>12} {:>7}", "date", "kind", "price", "pos");
            for event in &metrics.trade_log {
                let _ = writeln!(
                    out,
                    "  {:<12} {:<5} {:>12.4} {:>7}",
                    event.date, event.kind, event.price, event.resulting_position
                );
            }
        }

        out
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        symbol: &str,
        metrics: &PerformanceMetrics,
        output_path: &str,
    ) -> Result<(), OsctraderError> {
        fs::write(output_path, Self::render(symbol, metrics))?;
        Ok(())
    }
}
