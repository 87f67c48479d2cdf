//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the candidate file staged for upload
//! - **Notification Types** - severity of user-facing messages

use crate::config::UploadConfig;
use crate::error::UploadError;

// =============================================================================
// File Types
// =============================================================================

/// A file the user picked or dropped, before it is accepted.
///
/// Only the metadata needed for validation and display is kept; the file
/// contents stay in the browser's native input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    /// Display name, as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lower-cased suffix after the last `.`, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Check the file against the configured type and size limits.
    ///
    /// The type is checked first, so an oversized non-CSV file reports
    /// [`UploadError::InvalidFileType`].
    pub fn validate(&self, config: &UploadConfig) -> Result<(), UploadError> {
        let expected = config.allowed_extension.to_ascii_lowercase();
        if self.extension().as_deref() != Some(expected.as_str()) {
            return Err(UploadError::InvalidFileType {
                name: self.name.clone(),
            });
        }
        if self.size_bytes > config.max_file_size {
            return Err(UploadError::FileTooLarge {
                size: self.size_bytes,
                limit: config.max_file_size,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Validation failure
    Error,
    /// Something the user should double check
    Warning,
    /// Neutral information
    Info,
    /// Completed action
    Success,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Error => "flash-error",
            NotificationKind::Warning => "flash-warning",
            NotificationKind::Info => "flash-info",
            NotificationKind::Success => "flash-success",
        }
    }
}
