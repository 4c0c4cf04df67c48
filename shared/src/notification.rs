//! In-app notifications and their read state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    /// RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response of `PATCH /notifications/read-all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAllReadResponse {
    pub updated: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Replace the whole list with a fresh fetch
    Loaded(Vec<Notification>),
    MarkRead(String),
    MarkAllRead,
    Dismiss(String),
}

/// Notification list owned by the notification bell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    items: Vec<Notification>,
    /// Ids hidden by `Dismiss`; filtered out of every later `Loaded`
    dismissed: HashSet<String>,
}

impl NotificationState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items,
            dismissed: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| !n.read)
    }

    pub fn unread_count(&self) -> usize {
        self.unread().count()
    }

    /// Apply `action`; returns false when nothing changed.
    /// Unknown ids are ignored.
    pub fn reduce(&mut self, action: NotificationAction) -> bool {
        match action {
            NotificationAction::Loaded(mut items) => {
                items.retain(|n| !self.dismissed.contains(&n.id));
                if self.items == items {
                    return false;
                }
                self.items = items;
                true
            }
            NotificationAction::MarkRead(id) => {
                match self.items.iter_mut().find(|n| n.id == id && !n.read) {
                    Some(notification) => {
                        notification.read = true;
                        true
                    }
                    None => false,
                }
            }
            NotificationAction::MarkAllRead => {
                let mut changed = false;
                for notification in self.items.iter_mut().filter(|n| !n.read) {
                    notification.read = true;
                    changed = true;
                }
                changed
            }
            NotificationAction::Dismiss(id) => {
                let before = self.items.len();
                self.items.retain(|n| n.id != id);
                if self.items.len() == before {
                    return false;
                }
                self.dismissed.insert(id);
                true
            }
        }
    }
}
