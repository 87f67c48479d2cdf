//! Transient user-facing notifications.
//!
//! [`NotificationLog`] is the list shown in the notification area. Every
//! entry gets a unique id; the render layer schedules an expiry for that id
//! when it is pushed. Dismissing an entry early removes it, and the expiry
//! that fires later finds nothing to remove.

use crate::types::NotificationKind;

/// One message in the notification area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Ordered list of visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationLog {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a notification at the user's request.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.remove(id)
    }

    /// Remove a notification whose timeout elapsed.
    ///
    /// Returns `false` if it was dismissed earlier.
    pub fn expire(&mut self, id: u64) -> bool {
        self.remove(id)
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }
}
