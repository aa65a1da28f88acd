use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No input files specified.")]
    NoInputFiles,

    #[error("Failed to open output file '{path}': {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Per-input failures may be skipped; everything else aborts the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InputOpen { .. } | Self::InputRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
