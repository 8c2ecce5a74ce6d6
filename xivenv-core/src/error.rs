use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XivenvError {
    #[error("process not found: nothing running matches {0:?}")]
    ProcessNotFound(String),

    #[error("failed to list processes under {path}: {source}")]
    ProcessTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, XivenvError>;
