//! Transient UI state of a card view.
//!
//! Two flags live here: whether the QR overlay is open and the feedback of
//! the last clipboard copy. Neither is persisted. Changes are published on a
//! `watch` channel so a view can re-render when they flip.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

/// Feedback shown after the share action fell back to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    /// Nothing to show.
    #[default]
    Idle,
    /// The link was copied.
    Copied,
    /// The clipboard write failed.
    Failed,
}

/// Snapshot of the view's transient flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// Whether the QR overlay is visible.
    pub show_qr: bool,
    /// Clipboard copy feedback.
    pub copy: CopyFeedback,
}

impl UiState {
    /// Whether the "Link Copied!" confirmation is showing.
    #[must_use]
    pub fn copy_success(&self) -> bool {
        self.copy == CopyFeedback::Copied
    }

    /// Whether the "copy failed" notice is showing.
    #[must_use]
    pub fn copy_failed(&self) -> bool {
        self.copy == CopyFeedback::Failed
    }
}

/// Shared handle to a view's [`UiState`].
///
/// Clones refer to the same state. Background tasks should hold a
/// [`WeakCardState`] so they can't keep a torn-down view alive.
#[derive(Debug, Clone)]
pub struct CardState {
    tx: Arc<watch::Sender<UiState>>,
}

/// Non-owning handle to a [`CardState`].
#[derive(Debug, Clone)]
pub struct WeakCardState {
    tx: Weak<watch::Sender<UiState>>,
}

impl CardState {
    /// Create state with both flags cleared.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    /// Show or hide the QR overlay.
    pub fn set_show_qr(&self, show: bool) {
        self.tx.send_if_modified(|state| {
            let changed = state.show_qr != show;
            state.show_qr = show;
            changed
        });
    }

    /// Set the clipboard feedback.
    pub fn set_copy(&self, copy: CopyFeedback) {
        self.tx.send_if_modified(|state| {
            let changed = state.copy != copy;
            state.copy = copy;
            changed
        });
    }

    /// A handle that doesn't keep the state alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakCardState {
        WeakCardState {
            tx: Arc::downgrade(&self.tx),
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WeakCardState {
    /// The state, if its owner is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<CardState> {
        self.tx.upgrade().map(|tx| CardState { tx })
    }
}
