//! Error types for candidate output.

use std::path::PathBuf;
use thiserror::Error;

use crate::writer::WriteAttempt;

/// Errors that can occur while writing the candidate list.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The plan had no destinations.
    #[error("no output destinations configured")]
    NoDestinations,

    /// A destination failed for a reason other than permissions.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every destination refused the write.
    #[error("permission denied for every output destination: {}", format_attempts(.attempts))]
    AllDestinationsRejected { attempts: Vec<WriteAttempt> },
}

fn format_attempts(attempts: &[WriteAttempt]) -> String {
    attempts
        .iter()
        .map(|attempt| attempt.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
