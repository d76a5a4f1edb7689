//! Domain error types.

/// Top-level error type for osctrader.
#[derive(Debug, thiserror::Error)]
pub enum OsctraderError {
    #[error("no usable price data for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("invalid strategy parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&OsctraderError> for std::process::ExitCode {
    fn from(err: &OsctraderError) -> Self {
        let code: u8 = match err {
            OsctraderError::Io(_) => 1,
            OsctraderError::ConfigParse { .. }
            | OsctraderError::ConfigMissing { .. }
            | OsctraderError::ConfigInvalid { .. } => 2,
            OsctraderError::InvalidParameters { .. } => 3,
            OsctraderError::DataUnavailable { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
