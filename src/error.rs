//! Error types for the txt2tex library.
//!
//! Only I/O and configuration problems are errors. Classifying a line never
//! fails: a line no heading rule recognises simply becomes a paragraph, and
//! undecodable input bytes are replaced with U+FFFD during loading. So every
//! [`Txt2TexError`] is fatal for the run that produced it.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the txt2tex library.
#[derive(Debug, Error)]
pub enum Txt2TexError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Text file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed part-way.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output LaTeX file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
