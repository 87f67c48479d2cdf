//! Notification area with auto-dismissing flash messages.
//!
//! The list is mounted into the page's `.flash-container` the first time a
//! notification is pushed, so pages that never show one keep their DOM as is.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::notifications::{Notification, NotificationLog};
use crate::services::notification_area;
use crate::NotificationKind;

/// Handle to the notification area, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    log: RwSignal<NotificationLog>,
    mounted: StoredValue<bool>,
    timeout_ms: u32,
}

impl NotificationCenter {
    /// Must be called inside a reactive owner.
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            log: create_rw_signal(NotificationLog::new()),
            mounted: store_value(false),
            timeout_ms,
        }
    }

    /// Show a validation error.
    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    /// Show a notification and schedule its removal.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        self.ensure_mounted();

        let message = message.into();
        let Some(id) = self.log.try_update(|log| log.push(kind, message)) else {
            return;
        };

        let center = *self;
        spawn_local(async move {
            TimeoutFuture::new(center.timeout_ms).await;
            if center.log.try_update(|log| log.expire(id)) == Some(true) {
                log::debug!("Notification {} expired", id);
            }
        });
    }

    /// Remove a notification right away.
    pub fn dismiss(&self, id: u64) {
        if self.log.try_update(|log| log.dismiss(id)) == Some(true) {
            log::debug!("Notification {} dismissed", id);
        }
    }

    fn ensure_mounted(&self) {
        if self.mounted.get_value() {
            return;
        }
        match notification_area() {
            Ok(area) => {
                let center = *self;
                mount_to(area, move || view! { <NotificationList center=center/> });
                self.mounted.set_value(true);
            }
            Err(e) => log::error!("❌ Cannot show notifications: {}", e),
        }
    }
}

#[component]
fn NotificationList(center: NotificationCenter) -> impl IntoView {
    view! {
        <For
            each=move || center.log.with(|log| log.entries().to_vec())
            key=|notification| notification.id
            children=move |notification: Notification| {
                let id = notification.id;
                let class = format!("flash-message {}", notification.kind.css_class());
                view! {
                    <div class=class role="alert">
                        <span class="flash-text">{notification.message}</span>
                        <button
                            type="button"
                            class="flash-close"
                            aria-label="Dismiss"
                            on:click=move |_| center.dismiss(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            }
        />
    }
}
