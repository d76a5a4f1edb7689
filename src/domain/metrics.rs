//! Performance metrics over a trade log.
//!
//! All metrics are pure reductions over the realized-return sequence. A return
//! is realized on each sell event, measured against the immediately preceding
//! log entry whatever its kind. Drawdown is taken over the additive cumulative
//! sum of simple returns.

use crate::domain::signal::{TradeEvent, TradeKind};

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub trade_log: Vec<TradeEvent>,
}

impl PerformanceMetrics {
    /// Reduce a trade log to summary statistics.
    ///
    /// An empty returns sequence (empty log, or a log with no sell after the
    /// first entry) is a valid outcome and yields the zero record, not an
    /// error.
    pub fn compute(trade_log: Vec<TradeEvent>) -> Self {
        let returns = realized_returns(&trade_log);

        if returns.is_empty() {
            return PerformanceMetrics {
                total_return: 0.0,
                sharpe_ratio: 0.0,
                max_drawdown: 0.0,
                win_rate: 0.0,
                trade_log,
            };
        }

        let total_return = returns.iter().map(|r| 1.0 + r).product::<f64>() - 1.0;
        let sharpe_ratio = compute_sharpe(&returns);
        let max_drawdown = compute_drawdown(&returns);
        let wins = returns.iter().filter(|r| **r > 0.0).count();
        let win_rate = wins as f64 / returns.len() as f64;

        PerformanceMetrics {
            total_return,
            sharpe_ratio,
            max_drawdown,
            win_rate,
            trade_log,
        }
    }
}

/// One simple return per sell event, against the previous log entry.
fn realized_returns(trade_log: &[TradeEvent]) -> Vec<f64> {
    trade_log
        .windows(2)
        .filter(|pair| pair[1].kind == TradeKind::Sell)
        .map(|pair| (pair[1].price - pair[0].price) / pair[0].price)
        .collect()
}

/// Raw mean over sample standard deviation; zero when fewer than two returns
/// or when the returns do not vary. No annualization, no risk-free rate.
fn compute_sharpe(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let stddev = variance.sqrt();

    if stddev > 0.0 { mean / stddev } else { 0.0 }
}

/// Largest drop of the cumulative-sum series below its running maximum.
fn compute_drawdown(returns: &[f64]) -> f64 {
    let mut cumulative = 0.0;
    let mut peak = f64::MIN;
    let mut max_dd = 0.0;

    for r in returns {
        cumulative += r;
        if cumulative > peak {
            peak = cumulative;
        }
        let dd = peak - cumulative;
        if dd > max_dd {
            max_dd = dd;
        }
    }

    max_dd
}
