//! Notification list state for the bell badge and notifications page.
//!
//! Marking read is mirrored locally first and sent to the server best-effort,
//! the same way like toggles are.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::page::Page;
use crate::net::types::Notification;

#[derive(Clone, Debug)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            has_more: true,
            loading: false,
            error: None,
        }
    }
}

impl NotificationsState {
    pub fn next_page(&self) -> Option<u32> {
        if self.loading || !self.has_more {
            return None;
        }
        Some(self.page + 1)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Page 1 replaces the list; later pages append, skipping ids already
    /// present so a shifted page cannot count an unread item twice.
    pub fn apply_page(&mut self, page: Page<Notification>) {
        self.loading = false;
        self.has_more = page.has_more;
        if page.page <= 1 {
            self.items = page.items;
        } else {
            for item in page.items {
                if !self.items.iter().any(|n| n.id == item.id) {
                    self.items.push(item);
                }
            }
        }
        self.page = page.page;
    }

    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Flip the local read flag. Returns `true` only when an unread
    /// notification changed, i.e. when the remote call is worth issuing.
    pub fn mark_read(&mut self, notification_id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == notification_id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Ids of every unread notification, marking them read locally.
    pub fn mark_all_read(&mut self) -> Vec<String> {
        self.items
            .iter_mut()
            .filter(|n| !n.is_read)
            .map(|n| {
                n.is_read = true;
                n.id.clone()
            })
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }
}
