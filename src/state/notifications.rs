//! Notification list state.
//!
//! The backing list is replaced wholesale on every fetch. Read flags are
//! flipped one item at a time by independently completing mark-read
//! operations, so the unread counter must tolerate any completion order and
//! can never go negative. Nothing here is persisted; a reload starts over.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// One entry in the notification menu.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Relative display time, as produced by the data source.
    pub time: String,
    pub read: bool,
}

/// Notification menu state.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
}

impl NotificationsState {
    /// Replace the entire visible list with a freshly fetched batch.
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
        self.loading = false;
    }

    /// Entries still unread. Counted on demand so the displayed badge can
    /// never drift below zero.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Ids of unread entries, in display order.
    #[must_use]
    pub fn unread_ids(&self) -> Vec<u32> {
        self.items.iter().filter(|n| !n.read).map(|n| n.id).collect()
    }

    /// Flip one entry to read. Returns `false` when the id is unknown or the
    /// entry was already read, so repeated completions cannot over-decrement
    /// the badge.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }
}

/// Fixed sample batch standing in for a server feed. Ids are unique within
/// the batch.
#[must_use]
pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New assignment".to_owned(),
            message: "You have a new assignment in Math course".to_owned(),
            time: "5 min ago".to_owned(),
            read: false,
        },
        Notification {
            id: 2,
            title: "Grade posted".to_owned(),
            message: "Your Science exam has been graded".to_owned(),
            time: "1 hour ago".to_owned(),
            read: false,
        },
        Notification {
            id: 3,
            title: "Course update".to_owned(),
            message: "History course materials have been updated".to_owned(),
            time: "3 hours ago".to_owned(),
            read: true,
        },
    ]
}
