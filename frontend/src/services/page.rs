//! Access to the server-rendered page the component lives in.
//!
//! The SpendWise server renders the upload page; this module finds the
//! hooks it leaves for us (mount point, configuration block, flash area).

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{UploadConfig, CONFIG_SCRIPT_ID, MOUNT_POINT_ID};
use crate::error::{AppError, AppResult};

/// Class of the shared notification area.
pub const NOTIFICATION_AREA_CLASS: &str = "flash-container";

/// Element the upload component is mounted into.
pub fn mount_point() -> AppResult<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or_else(|| AppError::Dom(format!("#{} not found", MOUNT_POINT_ID)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom(format!("#{} is not an HTML element", MOUNT_POINT_ID)))
}

/// Read the inline configuration block, falling back to defaults.
pub fn load_config() -> UploadConfig {
    let Some(block) = gloo_utils::document().get_element_by_id(CONFIG_SCRIPT_ID) else {
        log::debug!("No #{} block, using default upload config", CONFIG_SCRIPT_ID);
        return UploadConfig::default();
    };

    let json = block.text_content().unwrap_or_default();
    match UploadConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("Loaded upload config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("⚠️ {} - using defaults", e);
            UploadConfig::default()
        }
    }
}

/// The page's notification area, created and appended to `<body>` if absent.
pub fn notification_area() -> AppResult<HtmlElement> {
    let document = gloo_utils::document();
    let selector = format!(".{}", NOTIFICATION_AREA_CLASS);

    let existing = document
        .query_selector(&selector)
        .map_err(|e| AppError::Dom(format!("Invalid selector {}: {:?}", selector, e)))?;

    let element = match existing {
        Some(element) => element,
        None => {
            let element = document
                .create_element("div")
                .map_err(|e| {
                    AppError::Dom(format!("Failed to create notification area: {:?}", e))
                })?;
            element.set_class_name(NOTIFICATION_AREA_CLASS);
            gloo_utils::body()
                .append_child(&element)
                .map_err(|e| {
                    AppError::Dom(format!("Failed to attach notification area: {:?}", e))
                })?;
            log::debug!("Created notification area");
            element
        }
    };

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom("Notification area is not an HTML element".to_string()))
}
