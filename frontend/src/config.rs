//! Application configuration.
//!
//! Compile-time defaults for the upload workflow. The server-rendered page
//! may override any of them with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="upload-config">
//!   { "action": "/", "maxFileSize": 16777216 }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Form action the CSV is posted to.
///
/// The SpendWise server handles uploads on its index route.
pub const DEFAULT_UPLOAD_ACTION: &str = "/";

/// Multipart field name the server reads the file from.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Maximum file size for upload (in bytes).
///
/// 16 MiB, same as the server's content length limit.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Only extension accepted by the server (compared case-insensitively).
pub const ALLOWED_EXTENSION: &str = "csv";

/// Lifetime of a validation notification before it removes itself.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

/// Id of the element the upload component is mounted into.
pub const MOUNT_POINT_ID: &str = "upload-root";

/// Id of the optional inline JSON configuration block.
pub const CONFIG_SCRIPT_ID: &str = "upload-config";

/// Runtime configuration of the upload workflow.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// Form action URL
    pub action: String,
    /// Multipart field name
    pub field_name: String,
    /// Largest accepted file, in bytes
    pub max_file_size: u64,
    /// Accepted extension, without the dot
    pub allowed_extension: String,
    /// Notification lifetime in milliseconds
    pub notification_timeout_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            action: DEFAULT_UPLOAD_ACTION.to_string(),
            field_name: UPLOAD_FIELD_NAME.to_string(),
            max_file_size: MAX_FILE_SIZE,
            allowed_extension: ALLOWED_EXTENSION.to_string(),
            notification_timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }
}

impl UploadConfig {
    /// Parse an inline JSON configuration block.
    ///
    /// Missing fields keep their defaults; an empty block yields the defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Value of the `accept` attribute for the file picker.
    pub fn accept_attribute(&self) -> String {
        format!(".{}", self.allowed_extension)
    }

    fn validate(&self) -> AppResult<()> {
        if self.allowed_extension.is_empty() || self.allowed_extension.starts_with('.') {
            return Err(AppError::Config(format!(
                "allowedExtension must be a bare extension, got '{}'",
                self.allowed_extension
            )));
        }
        if self.field_name.is_empty() {
            return Err(AppError::Config("fieldName must not be empty".to_string()));
        }
        Ok(())
    }
}
