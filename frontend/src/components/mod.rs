//! UI Components for the SpendWise upload page.
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file upload form with drag & drop
//! - [`NotificationCenter`] - auto-dismissing flash messages

mod notifications;
mod upload;

pub use notifications::*;
pub use upload::*;
