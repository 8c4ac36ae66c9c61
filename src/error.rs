//! Error types for syncheck
//!
//! Everything that can fail while launching the external checker or
//! bootstrapping the GUI. Checker-reported diagnostics on stderr are not
//! errors; they are output.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for syncheck operations
#[derive(Error, Debug)]
pub enum SyncheckError {
    #[error("{} not found. Did you compile it?", .0.display())]
    CheckerNotFound(PathBuf),

    #[error("Failed to launch checker '{}': {source}", .program.display())]
    LaunchFailed {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to capture checker output: {0}")]
    CaptureFailed(String),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for syncheck operations
pub type Result<T> = std::result::Result<T, SyncheckError>;

impl SyncheckError {
    /// Classify a spawn failure: a missing executable gets its own variant
    /// so the dialog can suggest building it.
    pub fn from_spawn(program: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SyncheckError::CheckerNotFound(program.to_path_buf())
        } else {
            SyncheckError::LaunchFailed {
                program: program.to_path_buf(),
                source,
            }
        }
    }
}
