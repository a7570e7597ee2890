//! Error taxonomy for token reads.
//!
//! Readers and the parser return `TokenError`; application code (config
//! loading, CLI) wraps it into `anyhow::Error` with context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    /// No stream was handed to the parser.
    #[error("no input stream supplied to the token parser")]
    InvalidInput,

    /// Token file is missing or cannot be opened for reading.
    #[error("failed to open token file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stream was opened but reading it failed (I/O error or invalid UTF-8).
    #[error("failed to read token stream")]
    Read(#[source] io::Error),

    /// Stream was scanned to the end without a `key=value` line for `key`.
    #[error("token '{key}' not found")]
    TokenNotFound { key: String },

    #[error("environment variable '{name}' is not set")]
    EnvVarMissing { name: String },
}
