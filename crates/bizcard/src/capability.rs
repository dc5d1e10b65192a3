//! Platform capabilities the card depends on.
//!
//! The share coordinator and QR presenter never read ambient state
//! directly. The page address, native share action, clipboard and barcode
//! renderer are injected through these traits, with system implementations
//! in [`crate::platform`] and test doubles wherever they're needed.

use serde::Serialize;
use thiserror::Error;

/// Errors reported by a capability.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The capability isn't available on this platform.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The user dismissed the share action.
    #[error("share cancelled")]
    Cancelled,

    /// The clipboard could not be written.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The native share action failed.
    #[error("share failed: {0}")]
    Share(String),

    /// The barcode could not be produced.
    #[error("barcode rendering failed: {0}")]
    Render(String),
}

/// Result type for capability calls.
pub type Result<T> = std::result::Result<T, CapabilityError>;

/// What gets shared: a title, a short message and the page address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    /// Title of the shared item.
    pub title: String,
    /// Descriptive message.
    pub text: String,
    /// Address being shared.
    pub url: String,
}

impl SharePayload {
    /// The payload for sharing `name`'s card located at `url`.
    #[must_use]
    pub fn for_card(name: &str, url: impl Into<String>) -> Self {
        Self {
            title: format!("{name} - Digital Card"),
            text: format!("Check out {name}'s digital business card."),
            url: url.into(),
        }
    }
}

/// Source of the current page address.
pub trait Location: Send + Sync {
    /// The address of the page being viewed.
    fn current_address(&self) -> String;
}

/// A native share action.
#[async_trait::async_trait]
pub trait Sharer: Send + Sync {
    /// Whether the share action can be used right now.
    fn is_available(&self) -> bool;

    /// Hand `payload` to the platform's share action.
    ///
    /// # Errors
    ///
    /// Returns an error if the share fails or the user cancels it.
    async fn share(&self, payload: &SharePayload) -> Result<()>;
}

/// Write access to the system clipboard.
#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard can't be written.
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Renders a value as a two-dimensional barcode.
pub trait BarcodeRenderer: Send + Sync {
    /// Render `value` as an SVG document at least `size` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` can't be encoded.
    fn render_svg(&self, value: &str, size: u32) -> Result<String>;

    /// Render `value` with Unicode block characters for a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` can't be encoded.
    fn render_text(&self, value: &str) -> Result<String>;
}

/// A fixed page address, typically taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation {
    address: String,
}

impl StaticLocation {
    /// Create a location that always reports `address`.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Location for StaticLocation {
    fn current_address(&self) -> String {
        self.address.clone()
    }
}
