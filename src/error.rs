//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that cross the pipeline boundary.
///
/// Malformed messages and empty archives are deliberately not represented
/// here: missing headers leave fields unset and zero messages is a valid
/// terminal state. Individual write failures are collected as
/// [`crate::WriteFailure`] values in the export status rather than raised.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source archive could not be read at all
    #[error("failed to read archive {path}: {source}")]
    ArchiveUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
