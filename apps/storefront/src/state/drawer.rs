//! # Drawer State
//!
//! View-side state of the cart drawer: the removal confirmation dialog and
//! the transient feedback banner. None of it affects the cart's rules.
//!
//! ```text
//! ┌────────────────────────────┐   request_removal(id)   ┌──────────────────┐
//! │  pending_removal: None     │ ──────────────────────► │ pending: Some(id)│
//! │                            │ ◄────────────────────── │                  │
//! └────────────────────────────┘  cancel / confirm       └──────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::ProductId;

/// What the banner is about; views pick its colour from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    /// Ceiling hit on "+"
    Max,
    /// Floor hit on "-"
    Min,
    /// A line was removed after confirmation
    Removed,
    /// A product card added one unit
    Added,
}

/// A banner message that disappears at `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Feedback {
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct Drawer {
    pending_removal: Option<ProductId>,
    feedback: Option<Feedback>,
}

/// Session-wide drawer handle. Cloning shares the same drawer.
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    inner: Arc<Mutex<Drawer>>,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_drawer<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Drawer) -> R,
    {
        let mut drawer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut drawer)
    }

    /// Replaces the banner. A newer message always wins.
    pub fn show(
        &self,
        kind: FeedbackKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
        ttl_ms: u64,
    ) {
        let ttl = Duration::milliseconds(i64::try_from(ttl_ms).unwrap_or(i64::MAX));
        let feedback = Feedback {
            kind,
            message: message.into(),
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.with_drawer(|d| d.feedback = Some(feedback));
    }

    /// The banner, if it has not expired yet. Expired banners are dropped.
    pub fn feedback(&self, now: DateTime<Utc>) -> Option<Feedback> {
        self.with_drawer(|d| {
            if d.feedback.as_ref().is_some_and(|f| !f.is_live(now)) {
                d.feedback = None;
            }
            d.feedback.clone()
        })
    }

    /// Opens the confirmation dialog for `id`, replacing any earlier request.
    pub fn request_removal(&self, id: ProductId) {
        self.with_drawer(|d| d.pending_removal = Some(id));
    }

    /// Closes the dialog, returning the id it was asking about.
    pub fn take_pending_removal(&self) -> Option<ProductId> {
        self.with_drawer(|d| d.pending_removal.take())
    }

    pub fn pending_removal(&self) -> Option<ProductId> {
        self.with_drawer(|d| d.pending_removal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_expires() {
        let drawer = DrawerState::new();
        let t0 = Utc::now();

        drawer.show(FeedbackKind::Max, "full", t0, 3_000);

        let live = drawer.feedback(t0 + Duration::milliseconds(2_999)).unwrap();
        assert_eq!(live.kind, FeedbackKind::Max);
        assert_eq!(live.message, "full");

        assert!(drawer.feedback(t0 + Duration::milliseconds(3_000)).is_none());
        // Dropped for good, even when asked with an earlier clock
        assert!(drawer.feedback(t0).is_none());
    }

    #[test]
    fn test_newer_feedback_replaces_older() {
        let drawer = DrawerState::new();
        let t0 = Utc::now();

        drawer.show(FeedbackKind::Max, "first", t0, 3_000);
        drawer.show(FeedbackKind::Min, "second", t0, 3_000);

        assert_eq!(drawer.feedback(t0).unwrap().kind, FeedbackKind::Min);
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let drawer = DrawerState::new();
        let t0 = Utc::now();

        drawer.show(FeedbackKind::Added, "ok", t0, u64::MAX);

        assert!(drawer.feedback(t0).is_some());
    }

    #[test]
    fn test_pending_removal_round_trip() {
        let drawer = DrawerState::new();
        assert_eq!(drawer.pending_removal(), None);

        drawer.request_removal(ProductId::new(2));
        drawer.request_removal(ProductId::new(5));
        assert_eq!(drawer.pending_removal(), Some(ProductId::new(5)));

        assert_eq!(drawer.take_pending_removal(), Some(ProductId::new(5)));
        assert_eq!(drawer.take_pending_removal(), None);
    }
}
