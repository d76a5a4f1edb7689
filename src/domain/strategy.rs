//! Strategy parameter set and validation.

use crate::domain::error::OsctraderError;

/// Parameters for the RSI/MA mean-reversion strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParams {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            ma_window: 20,
            rsi_window: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

impl StrategyParams {
    /// Reject parameter sets the engine cannot run on. Called before any data
    /// is fetched or touched.
    pub fn validate(&self) -> Result<(), OsctraderError> {
        if self.ma_window == 0 {
            return Err(OsctraderError::InvalidParameters {
                reason: "ma_window must be positive".into(),
            });
        }
        if self.rsi_window == 0 {
            return Err(OsctraderError::InvalidParameters {
                reason: "rsi_window must be positive".into(),
            });
        }
        if !(self.rsi_oversold < self.rsi_overbought) {
            return Err(OsctraderError::InvalidParameters {
                reason: format!(
                    "rsi_oversold ({}) must be below rsi_overbought ({})",
                    self.rsi_oversold, self.rsi_overbought
                ),
            });
        }
        Ok(())
    }
}
