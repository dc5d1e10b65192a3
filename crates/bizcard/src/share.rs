//! The share action.
//!
//! [`ShareCoordinator`] hands the page address to the native share action
//! when one is available. Otherwise it copies the address to the clipboard
//! and shows copy feedback for [`COPY_FEEDBACK_DURATION`].
//!
//! Each clipboard fallback schedules its own reset; later actions don't
//! cancel earlier resets. Pending resets are aborted when the coordinator is
//! dropped and only hold a weak reference to the view state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::capability::{Clipboard, Location, SharePayload, Sharer};
use crate::profile::Profile;
use crate::state::{CardState, CopyFeedback};

/// How long copy feedback stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// What a share action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share action completed.
    Shared,
    /// The native share action failed or was cancelled.
    Dismissed,
    /// The address was copied to the clipboard.
    Copied,
    /// The clipboard write failed.
    CopyFailed,
}

impl fmt::Display for ShareOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::Dismissed => write!(f, "dismissed"),
            Self::Copied => write!(f, "copied"),
            Self::CopyFailed => write!(f, "copy failed"),
        }
    }
}

/// Runs the share action against injected capabilities.
pub struct ShareCoordinator {
    sharer: Arc<dyn Sharer>,
    clipboard: Arc<dyn Clipboard>,
    location: Arc<dyn Location>,
    state: CardState,
    resets: JoinSet<()>,
}

impl fmt::Debug for ShareCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareCoordinator")
            .field("state", &self.state)
            .field("pending_resets", &self.resets.len())
            .finish_non_exhaustive()
    }
}

impl ShareCoordinator {
    /// Create a coordinator that reports feedback into `state`.
    #[must_use]
    pub fn new(
        sharer: Arc<dyn Sharer>,
        clipboard: Arc<dyn Clipboard>,
        location: Arc<dyn Location>,
        state: CardState,
    ) -> Self {
        Self {
            sharer,
            clipboard,
            location,
            state,
            resets: JoinSet::new(),
        }
    }

    /// Share the card of `profile`.
    ///
    /// Failures are recovered here: a failed native share is logged, a
    /// failed clipboard write shows as [`CopyFeedback::Failed`].
    pub async fn share(&mut self, profile: &Profile) -> ShareOutcome {
        let url = self.location.current_address();

        if self.sharer.is_available() {
            let payload = SharePayload::for_card(&profile.name, url);
            return match self.sharer.share(&payload).await {
                Ok(()) => {
                    info!(url = %payload.url, "Shared card");
                    ShareOutcome::Shared
                }
                Err(e) => {
                    debug!(error = %e, "Share dismissed");
                    ShareOutcome::Dismissed
                }
            };
        }

        debug!("Native share unavailable, copying link");
        let outcome = match self.clipboard.write_text(&url).await {
            Ok(()) => {
                info!(url = %url, "Copied link to clipboard");
                self.state.set_copy(CopyFeedback::Copied);
                ShareOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, "Failed to copy link");
                self.state.set_copy(CopyFeedback::Failed);
                ShareOutcome::CopyFailed
            }
        };
        self.schedule_reset();
        outcome
    }

    /// Number of copy feedback resets that haven't fired yet.
    #[must_use]
    pub fn pending_resets(&mut self) -> usize {
        self.reap();
        self.resets.len()
    }

    /// Abort all pending copy feedback resets.
    pub fn cancel_pending(&mut self) {
        self.resets.abort_all();
    }

    fn schedule_reset(&mut self) {
        self.reap();
        // Deadline is fixed now, not when the task first runs.
        let deadline = Instant::now() + COPY_FEEDBACK_DURATION;
        let state = self.state.downgrade();
        self.resets.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(state) = state.upgrade() {
                state.set_copy(CopyFeedback::Idle);
            }
        });
    }

    fn reap(&mut self) {
        while self.resets.try_join_next().is_some() {}
    }
}
