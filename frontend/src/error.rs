//! Error types for the upload frontend.
//!
//! - [`UploadError`] - file validation failures, shown to the user
//! - [`AppError`] - startup and DOM wiring failures, logged only
//!
//! Every [`UploadError`] is recoverable: the user simply picks another file.

use thiserror::Error;

const MIB: u64 = 1024 * 1024;

// =============================================================================
// Validation Errors
// =============================================================================

/// Validation failures for a selected file.
///
/// The `Display` text is the user-facing notification message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The file name does not end in the accepted extension.
    #[error("Please select a CSV file.")]
    InvalidFileType { name: String },

    /// The file exceeds the configured size limit.
    #[error("File size must be less than {}MB.", .limit / MIB)]
    FileTooLarge { size: u64, limit: u64 },
}

impl UploadError {
    /// Short machine-readable tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::InvalidFileType { .. } => "invalid_file_type",
            UploadError::FileTooLarge { .. } => "file_too_large",
        }
    }
}

// =============================================================================
// Application Errors
// =============================================================================

/// Startup errors. None of them is fatal to the page.
#[derive(Debug, Error)]
pub enum AppError {
    /// The inline configuration block could not be used.
    #[error("Invalid upload configuration: {0}")]
    Config(String),

    /// A DOM element the component needs is missing.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
