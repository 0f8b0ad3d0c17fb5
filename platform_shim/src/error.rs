//! Error types produced by the shim.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Failures reported by shim queries and configuration loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShimError {
    /// A real path was requested for a virtual path that was never redirected.
    #[error("no redirection registered for '{path}'")]
    NotRedirected {
        /// Virtual path the loader asked about.
        path: Utf8PathBuf,
    },

    /// The shim configuration file exists but could not be read.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The shim configuration file could not be parsed or deserialized.
    #[error("failed to load shim configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}

/// Result alias used throughout the crate.
pub type ShimResult<T> = Result<T, ShimError>;
