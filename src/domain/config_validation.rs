//! Configuration validation.
//!
//! Validates the [data], [backtest], and [strategy] sections before a run.

use crate::domain::error::OsctraderError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    validate_csv_dir(config)?;
    validate_symbol(config)?;
    validate_dates(config)?;
    Ok(())
}

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    validate_window(config, "ma_window", 20)?;
    validate_window(config, "rsi_window", 14)?;
    validate_thresholds(config)?;
    Ok(())
}

fn validate_csv_dir(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    match config.get_string("data", "csv_dir") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(OsctraderError::ConfigMissing {
            section: "data".to_string(),
            key: "csv_dir".to_string(),
        }),
    }
}

fn validate_symbol(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    match config.get_string("backtest", "symbol") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(OsctraderError::ConfigMissing {
            section: "backtest".to_string(),
            key: "symbol".to_string(),
        }),
    }
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    let start_str = config.get_string("backtest", "start_date");
    let end_str = config.get_string("backtest", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;

    if start_date >= end_date {
        return Err(OsctraderError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, OsctraderError> {
    match value {
        None => Err(OsctraderError::ConfigMissing {
            section: "backtest".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| OsctraderError::ConfigInvalid {
                section: "backtest".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            })
        }
    }
}

fn validate_window(
    config: &dyn ConfigPort,
    key: &str,
    default: i64,
) -> Result<(), OsctraderError> {
    let value = config.get_int("strategy", key, default);
    if value <= 0 {
        return Err(OsctraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: key.to_string(),
            reason: format!("{} must be positive", key),
        });
    }
    Ok(())
}

fn validate_thresholds(config: &dyn ConfigPort) -> Result<(), OsctraderError> {
    let oversold = config.get_double("strategy", "rsi_oversold", 30.0);
    let overbought = config.get_double("strategy", "rsi_overbought", 70.0);

    for (key, value) in [("rsi_oversold", oversold), ("rsi_overbought", overbought)] {
        if !(0.0..=100.0).contains(&value) {
            return Err(OsctraderError::ConfigInvalid {
                section: "strategy".to_string(),
                key: key.to_string(),
                reason: format!("{} must be between 0 and 100", key),
            });
        }
    }

    if oversold >= overbought {
        return Err(OsctraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "rsi_oversold".to_string(),
            reason: "rsi_oversold must be below rsi_overbought".to_string(),
        });
    }
    Ok(())
}
