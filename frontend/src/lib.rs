//! SpendWise - Upload Frontend (Rust/Leptos)
//!
//! A WebAssembly enhancement for the SpendWise upload page. It validates
//! the bank statement the user picks or drops, shows it, and lets the
//! browser post it to the server with a native form submission.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Server-rendered upload page                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  #upload-root                                               │
//! │  └── UploadSection ──dispatch──▶ UploadWorkflow (pure)      │
//! │                     ◀──effects──                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  .flash-container (created lazily)                          │
//! │  └── NotificationList                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and the page-provided [`UploadConfig`]
//! - [`error`] - Validation and startup errors
//! - [`types`] - Common types (CandidateFile, NotificationKind)
//! - [`format`] - Human-readable file sizes
//! - [`workflow`] - The upload state machine, DOM-free
//! - [`notifications`] - Notification list, DOM-free
//! - [`components`] - Leptos components rendering the above
//! - [`services`] - Lookups into the server-rendered page

use leptos::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod format;
pub mod workflow;
pub mod notifications;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult, UploadError};

// Types
pub use types::{CandidateFile, NotificationKind};

// Workflow
pub use format::format_file_size;
pub use workflow::{Effect, Presentation, SelectionSource, UploadEvent, UploadState, UploadWorkflow};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the upload form into the page, if the page has a mount point.
///
/// The bundle is included on every page; pages without `#upload-root`
/// are left untouched.
pub fn mount() {
    let root = match services::mount_point() {
        Ok(root) => root,
        Err(e) => {
            log::debug!("Upload form not mounted: {}", e);
            return;
        }
    };

    let config = services::load_config();
    log::info!("🦀 SpendWise upload - mounting into #{}", MOUNT_POINT_ID);

    mount_to(root, move || {
        let notifications = NotificationCenter::new(config.notification_timeout_ms);
        view! { <UploadSection config=config notifications=notifications/> }
    });
}
