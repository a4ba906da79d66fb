use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems reading or validating [`crate::config::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cell count {value} is outside {min}..={max}")]
    CellCountOutOfRange { value: u16, min: u16, max: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("frame interval must be greater than zero")]
    ZeroFrameInterval,
    #[error("cell width must be greater than zero")]
    ZeroCellWidth,
    #[error("invalid color {value:?} for {field}, expected #RRGGBB")]
    InvalidColor { field: &'static str, value: String },
}

/// Top-level failure of the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
