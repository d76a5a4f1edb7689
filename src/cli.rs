//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::{run_backtest, BacktestRequest};
use crate::domain::config_validation::{validate_backtest_config, validate_strategy_config};
use crate::domain::error::OsctraderError;
use crate::domain::strategy::StrategyParams;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "osctrader", about = "RSI/MA mean-reversion strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// Override the configured symbol
        #[arg(long)]
        symbol: Option<String>,
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file without running
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            symbol,
            output,
        } => run_backtest_cmd(&config, symbol.as_deref(), output.as_ref()),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = OsctraderError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Read symbol and date range from the [backtest] section.
pub fn build_backtest_request(
    adapter: &dyn ConfigPort,
) -> Result<BacktestRequest, OsctraderError> {
    let symbol =
        adapter
            .get_string("backtest", "symbol")
            .ok_or_else(|| OsctraderError::ConfigMissing {
                section: "backtest".into(),
                key: "symbol".into(),
            })?;

    let start_date = parse_config_date(adapter, "start_date")?;
    let end_date = parse_config_date(adapter, "end_date")?;

    Ok(BacktestRequest {
        symbol,
        start_date,
        end_date,
    })
}

fn parse_config_date(adapter: &dyn ConfigPort, key: &str) -> Result<NaiveDate, OsctraderError> {
    let value = adapter
        .get_string("backtest", key)
        .ok_or_else(|| OsctraderError::ConfigMissing {
            section: "backtest".into(),
            key: key.into(),
        })?;

    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| OsctraderError::ConfigInvalid {
        section: "backtest".into(),
        key: key.into(),
        reason: "invalid date format (expected YYYY-MM-DD)".into(),
    })
}

/// Read strategy parameters from the [strategy] section, falling back to the
/// engine defaults for missing keys.
pub fn build_strategy_params(adapter: &dyn ConfigPort) -> StrategyParams {
    let defaults = StrategyParams::default();
    StrategyParams {
        ma_window: adapter.get_int("strategy", "ma_window", defaults.ma_window as i64) as usize,
        rsi_window: adapter.get_int("strategy", "rsi_window", defaults.rsi_window as i64) as usize,
        rsi_overbought: adapter.get_double("strategy", "rsi_overbought", defaults.rsi_overbought),
        rsi_oversold: adapter.get_double("strategy", "rsi_oversold", defaults.rsi_oversold),
    }
}

pub fn build_data_port(adapter: &dyn ConfigPort) -> Result<CsvAdapter, OsctraderError> {
    let csv_dir =
        adapter
            .get_string("data", "csv_dir")
            .ok_or_else(|| OsctraderError::ConfigMissing {
                section: "data".into(),
                key: "csv_dir".into(),
            })?;
    Ok(CsvAdapter::new(PathBuf::from(csv_dir)))
}

fn run_backtest_cmd(
    config_path: &PathBuf,
    symbol_override: Option<&str>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_strategy_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let request = match build_backtest_request(&adapter) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let symbol = symbol_override.unwrap_or(&request.symbol).to_string();
    let params = build_strategy_params(&adapter);

    let data_port = match build_data_port(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Running backtest for {} from {} to {}",
        symbol, request.start_date, request.end_date
    );
    let metrics = match run_backtest(
        &data_port,
        &symbol,
        request.start_date,
        request.end_date,
        &params,
    ) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match output_path {
        Some(path) => {
            let report = TextReportAdapter::new();
            if let Err(e) = report.write(&symbol, &metrics, &path.to_string_lossy()) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", TextReportAdapter::render(&symbol, &metrics)),
    }

    ExitCode::SUCCESS
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_port = match build_data_port(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match data_port.list_symbols() {
        Ok(symbols) => {
            for symbol in symbols {
                println!("{symbol}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_strategy_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("{}: config OK", config_path.display());
    ExitCode::SUCCESS
}
