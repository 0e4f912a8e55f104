pub const NOTIFICATION_LIFETIME_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
        }
    }
}

/// Holds at most one visible notification. Pushing replaces the current one
/// and returns the new id so the host can schedule its expiry.
#[derive(Debug, Default, Clone)]
pub struct NotificationStack {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationStack {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        self.next_id += 1;
        let note = Notification {
            id: self.next_id,
            kind,
            message: message.into(),
        };
        if let Some(old) = self.current.replace(note.clone()) {
            log::debug!("Notification {} replaced by {}", old.id, note.id);
        }
        note
    }

    /// Removes the notification only if it is still the visible one.
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(note) if note.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
