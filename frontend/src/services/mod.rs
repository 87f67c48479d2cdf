//! Page services.
//!
//! # Services
//!
//! - [`page`] - lookups into the server-rendered page (mount point, config
//!   block, notification area)
//!
//! The upload itself is a native form post, so there is no HTTP client here.

pub mod page;

pub use page::*;
