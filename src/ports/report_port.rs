//! Report generation port trait.

use crate::domain::error::OsctraderError;
use crate::domain::metrics::PerformanceMetrics;

/// Port for writing backtest reports.
pub trait ReportPort {
    fn write(
        &self,
        symbol: &str,
        metrics: &PerformanceMetrics,
        output_path: &str,
    ) -> Result<(), OsctraderError>;
}
