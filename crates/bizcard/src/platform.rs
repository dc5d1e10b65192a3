//! System implementations of the card's capabilities.

use std::fmt;
use std::process::Stdio;
use std::sync::Arc;

use clipboard_rs::{Clipboard as _, ClipboardContext};
use tokio::process::Command;
use tracing::{debug, trace};

use crate::capability::{
    BarcodeRenderer, CapabilityError, Clipboard, Location, Result, SharePayload, Sharer,
    StaticLocation,
};
use crate::config::Config;
use crate::qr::QrCodeRenderer;

/// The system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait::async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        // clipboard-rs is blocking
        tokio::task::spawn_blocking(move || {
            let ctx =
                ClipboardContext::new().map_err(|e| CapabilityError::Clipboard(e.to_string()))?;
            ctx.set_text(text)
                .map_err(|e| CapabilityError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| CapabilityError::Clipboard(e.to_string()))?
    }
}

/// Native share through an external command.
///
/// The page address is appended as the last argument; title, text and
/// address are also passed as `SHARE_TITLE`, `SHARE_TEXT` and `SHARE_URL`.
/// With no command configured the share action is unavailable.
#[derive(Debug, Clone, Default)]
pub struct CommandSharer {
    command: Vec<String>,
}

impl CommandSharer {
    /// Create a sharer running `command` (program first).
    #[must_use]
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

#[async_trait::async_trait]
impl Sharer for CommandSharer {
    fn is_available(&self) -> bool {
        !self.command.is_empty()
    }

    async fn share(&self, payload: &SharePayload) -> Result<()> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(CapabilityError::Unavailable("native share"));
        };

        debug!(program = %program, "Running share command");
        let status = Command::new(program)
            .args(args)
            .arg(&payload.url)
            .env("SHARE_TITLE", &payload.title)
            .env("SHARE_TEXT", &payload.text)
            .env("SHARE_URL", &payload.url)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| CapabilityError::Share(format!("{program}: {e}")))?;

        trace!(status = %status, "Share command finished");
        if status.success() {
            Ok(())
        } else {
            Err(CapabilityError::Share(format!("{program} exited with {status}")))
        }
    }
}

/// The set of capabilities a card view runs against.
#[derive(Clone)]
pub struct Capabilities {
    /// Current page address.
    pub location: Arc<dyn Location>,
    /// Native share action.
    pub sharer: Arc<dyn Sharer>,
    /// Clipboard access.
    pub clipboard: Arc<dyn Clipboard>,
    /// QR code renderer.
    pub renderer: Arc<dyn BarcodeRenderer>,
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("location", &self.location.current_address())
            .field("share_available", &self.sharer.is_available())
            .finish_non_exhaustive()
    }
}

impl Capabilities {
    /// System capabilities as configured by `config`.
    #[must_use]
    pub fn system(config: &Config) -> Self {
        Self {
            location: Arc::new(StaticLocation::new(config.page.url.clone())),
            sharer: Arc::new(CommandSharer::new(config.share.command.clone())),
            clipboard: Arc::new(SystemClipboard),
            renderer: Arc::new(QrCodeRenderer),
        }
    }
}
