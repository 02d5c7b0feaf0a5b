//! Errors from the fallible edges of glint: reading sources, loading settings, and parsing
//! command lines. Tokenizing, rendering, and palette generation never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to map source file: {0}")]
    Mmap(#[from] mmap_rs::Error),

    #[error("source file {0} is too large to map")]
    FileTooLarge(String),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("unknown background '{0}'")]
    UnknownBackground(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    #[error(transparent)]
    Args(#[from] pico_args::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
