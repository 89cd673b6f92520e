use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("side to move has no legal moves")]
    NoLegalMoves,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("time_fraction must be within [0, 1], got {0}")]
    TimeFraction(f64),
}

pub type EngineResult<T> = Result<T, EngineError>;
