//! RSI (Relative Strength Index) indicator.
//!
//! Uses plain rolling means of gains and losses over the trailing window:
//! - `delta[i] = close[i] - close[i-1]` (no delta exists for the first bar)
//! - `gain[i]` / `loss[i]`: trailing-window mean of `max(delta, 0)` / `max(-delta, 0)`
//! - `RSI = 100 - (100 / (1 + gain / loss))`
//!
//! A point is invalid until a full window of deltas exists (the first `window`
//! bars) and whenever the rolling loss mean is zero — the ratio is undefined
//! there and must surface as an absent value, not a crash.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::PriceBar;

pub fn calculate_rsi(bars: &[PriceBar], window: usize) -> IndicatorSeries {
    if window == 0 || bars.len() < 2 {
        let values = bars
            .iter()
            .map(|b| IndicatorPoint {
                date: b.date,
                valid: false,
                value: 0.0,
            })
            .collect();
        return IndicatorSeries {
            indicator_type: IndicatorType::Rsi(window),
            values,
        };
    }

    // gains[k] / losses[k] correspond to the delta into bar k + 1.
    let mut gains: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        let delta = bars[i].close - bars[i - 1].close;
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let mut values = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if i < window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        // Trailing window of deltas ending at bar i: gains[i-window..i].
        let avg_gain = gains[i - window..i].iter().sum::<f64>() / window as f64;
        let avg_loss = losses[i - window..i].iter().sum::<f64>() / window as f64;

        if avg_loss == 0.0 {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
        } else {
            let rs = avg_gain / avg_loss;
            values.push(IndicatorPoint {
                date: bar.date,
                valid: true,
                value: 100.0 - (100.0 / (1.0 + rs)),
            });
        }
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(window),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                symbol: "TEST".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect()
    }

    #[test]
    fn rsi_empty_bars() {
        let series = calculate_rsi(&[], 14);
        assert!(series.values.is_empty());
    }

    #[test]
    fn rsi_single_bar_invalid() {
        let series = calculate_rsi(&make_bars(&[100.0]), 14);
        assert_eq!(series.values.len(), 1);
        assert!(!series.values[0].valid);
    }

    #[test]
    fn rsi_warmup_period() {
        // Alternating moves so both gain and loss means are non-zero.
        let closes: Vec<f64> = (0..10)
            .map(|i| if i % 2 == 0 { 100.0 } else { 102.0 })
            .collect();
        let series = calculate_rsi(&make_bars(&closes), 4);

        for i in 0..4 {
            assert!(!series.values[i].valid, "bar {} should be invalid", i);
        }
        for i in 4..10 {
            assert!(series.values[i].valid, "bar {} should be valid", i);
        }
    }

    #[test]
    fn rsi_all_gains_is_undefined() {
        // Strictly rising closes: loss mean is zero, so the ratio is undefined.
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let series = calculate_rsi(&make_bars(&closes), 4);

        for point in &series.values {
            assert!(!point.valid);
        }
    }

    #[test]
    fn rsi_flat_series_is_undefined() {
        let series = calculate_rsi(&make_bars(&[100.0; 20]), 4);
        for point in &series.values {
            assert!(!point.valid);
        }
    }

    #[test]
    fn rsi_all_losses_is_zero() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let series = calculate_rsi(&make_bars(&closes), 4);

        for point in series.values.iter().skip(4) {
            assert!(point.valid);
            assert!((point.value - 0.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rsi_balanced_moves_is_fifty() {
        // Equal-sized up and down moves: gain mean == loss mean, RSI == 50.
        let closes: Vec<f64> = (0..9)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let series = calculate_rsi(&make_bars(&closes), 4);

        for point in series.values.iter().skip(4) {
            assert!(point.valid);
            assert!((point.value - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rsi_in_range_when_valid() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 2.0)
            .collect();
        let series = calculate_rsi(&make_bars(&closes), 14);

        let mut any_valid = false;
        for point in &series.values {
            if point.valid {
                any_valid = true;
                assert!(
                    (0.0..=100.0).contains(&point.value),
                    "RSI {} out of range",
                    point.value
                );
            }
        }
        assert!(any_valid);
    }

    #[test]
    fn rsi_known_calculation() {
        // Window 3 at the last bar: deltas -2, +1, +1.
        // gain mean = 2/3, loss mean = 2/3, rs = 1, RSI = 50.
        let series = calculate_rsi(&make_bars(&[100.0, 98.0, 99.0, 100.0]), 3);

        assert!(series.values[3].valid);
        assert!((series.values[3].value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rsi_loss_dominated_window() {
        // Window 3 at the last bar: deltas -10, -10, +1.
        // gain mean = 1/3, loss mean = 20/3, rs = 0.05, RSI ~= 4.76.
        let series = calculate_rsi(&make_bars(&[100.0, 90.0, 80.0, 81.0]), 3);

        assert!(series.values[3].valid);
        let expected = 100.0 - 100.0 / (1.0 + 0.05);
        assert!((series.values[3].value - expected).abs() < 1e-9);
    }

    #[test]
    fn rsi_zero_window_all_invalid() {
        let series = calculate_rsi(&make_bars(&[100.0, 101.0]), 0);
        assert_eq!(series.values.len(), 2);
        assert!(series.values.iter().all(|p| !p.valid));
    }

    #[test]
    fn rsi_indicator_type() {
        let series = calculate_rsi(&make_bars(&[100.0]), 14);
        assert_eq!(series.indicator_type, IndicatorType::Rsi(14));
    }
}
