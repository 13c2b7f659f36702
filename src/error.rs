use std::path::PathBuf;

/// Result type for lecture-scribe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for transcription and summary export
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input path checked before any provider call
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Failure raised by an external provider: missing CLI, unsupported
    /// model size, non-zero exit, or unparseable output
    #[error("provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
