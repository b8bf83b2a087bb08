//! Notification feed state for the alerts panel
//!
//! Owns the fetched notifications and the local mutations the panel
//! performs: marking items read and appending freshly created ones.

use crate::{Notification, Severity};

/// An owned collection of notifications with read tracking
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Create a feed from fetched notifications
    pub fn new(items: Vec<Notification>) -> Self {
        NotificationFeed { items }
    }

    /// Number of notifications in the feed
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed holds no notifications
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All notifications, in fetch order
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Number of unread notifications
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Number of notifications with the given severity
    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.items.iter().filter(|n| n.severity == severity).count()
    }

    /// The `n` most recent notifications, newest first
    ///
    /// Ties on the creation date keep their fetch order.
    pub fn latest(&self, n: usize) -> Vec<&Notification> {
        let mut sorted: Vec<&Notification> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(n);
        sorted
    }

    /// Append a freshly created notification to the feed
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Mark one notification as read
    ///
    /// Returns whether a matching unread notification was found.
    pub fn mark_read(&mut self, id: &str) -> bool {
        for item in &mut self.items {
            if item.id == id && !item.read {
                item.read = true;
                return true;
            }
        }
        false
    }

    /// Mark every notification as read, returning how many changed
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in &mut self.items {
            if !item.read {
                item.read = true;
                changed += 1;
            }
        }
        changed
    }
}
