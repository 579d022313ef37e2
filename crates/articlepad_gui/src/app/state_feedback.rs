//! Toast notifications reporting operation outcomes.

use super::{ArticlePadApp, ToastKind, ToastMessage, TOAST_LIMIT, TOAST_TTL};
use std::time::Instant;

impl ArticlePadApp {
    pub(super) fn notify_success(&mut self, description: impl Into<String>) {
        self.push_toast(ToastKind::Success, "Success", description.into());
    }

    pub(super) fn notify_error(&mut self, description: impl Into<String>) {
        self.push_toast(ToastKind::Error, "Error", description.into());
    }

    fn push_toast(&mut self, kind: ToastKind, title: &str, description: String) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.kind == kind && last.title == title && last.description == description {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.toasts.push_back(ToastMessage {
            id: self.next_toast_id,
            kind,
            title: title.to_string(),
            description,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Remove a toast the user closed.
    pub(super) fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub(super) fn expire_toasts(&mut self, now: Instant) {
        self.toasts.retain(|toast| now < toast.expires_at);
    }
}
