//! Simple moving average indicator.
//!
//! Arithmetic mean of close over the trailing `window` bars ending at each
//! index. The first `window - 1` points are invalid (insufficient history).

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::PriceBar;

pub fn calculate_sma(bars: &[PriceBar], window: usize) -> IndicatorSeries {
    if window == 0 {
        let values = bars
            .iter()
            .map(|b| IndicatorPoint {
                date: b.date,
                valid: false,
                value: 0.0,
            })
            .collect();
        return IndicatorSeries {
            indicator_type: IndicatorType::Sma(window),
            values,
        };
    }

    let mut values = Vec::with_capacity(bars.len());
    let mut rolling_sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        rolling_sum += bar.close;
        if i >= window {
            rolling_sum -= bars[i - window].close;
        }

        if i + 1 >= window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: true,
                value: rolling_sum / window as f64,
            });
        } else {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
        }
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(window),
        values,
    }
}
