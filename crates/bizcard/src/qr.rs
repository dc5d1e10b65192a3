//! QR code of the page address.
//!
//! The QR overlay shows the current page address as a QR code at error
//! correction level High. [`QrCodeRenderer`] does the encoding with the
//! `qrcode` crate; [`QrPresenter`] asks it to encode whatever the injected
//! [`Location`] reports.

use std::fmt;
use std::sync::Arc;

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::capability::{BarcodeRenderer, CapabilityError, Location, Result as CapResult};
use crate::config::DEFAULT_QR_SIZE;
use crate::error::{Error, Result};

/// Renders QR codes at error correction level High.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeRenderer;

impl QrCodeRenderer {
    fn encode(value: &str) -> CapResult<QrCode> {
        QrCode::with_error_correction_level(value.as_bytes(), EcLevel::H)
            .map_err(|e| CapabilityError::Render(e.to_string()))
    }
}

impl BarcodeRenderer for QrCodeRenderer {
    fn render_svg(&self, value: &str, size: u32) -> CapResult<String> {
        let code = Self::encode(value)?;
        Ok(code
            .render::<svg::Color<'_>>()
            .min_dimensions(size, size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }

    fn render_text(&self, value: &str) -> CapResult<String> {
        let code = Self::encode(value)?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build())
    }
}

/// A rendered QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// The encoded value.
    pub value: String,
    /// Requested edge length in pixels.
    pub size: u32,
    /// SVG document.
    pub svg: String,
}

/// Encodes the current page address for the QR overlay.
pub struct QrPresenter {
    renderer: Arc<dyn BarcodeRenderer>,
    location: Arc<dyn Location>,
    size: u32,
}

impl fmt::Debug for QrPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrPresenter")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl QrPresenter {
    /// Create a presenter rendering at the default size.
    #[must_use]
    pub fn new(renderer: Arc<dyn BarcodeRenderer>, location: Arc<dyn Location>) -> Self {
        Self {
            renderer,
            location,
            size: DEFAULT_QR_SIZE,
        }
    }

    /// Set the rendered edge length in pixels.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Rendered edge length in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The value the QR code encodes: the current page address.
    #[must_use]
    pub fn value(&self) -> String {
        self.location.current_address()
    }

    /// Render the QR code as SVG.
    ///
    /// # Errors
    ///
    /// Returns an error if the address can't be encoded.
    pub fn present(&self) -> Result<QrImage> {
        let value = self.value();
        debug!(value = %value, size = self.size, "Rendering QR code");
        let svg = self
            .renderer
            .render_svg(&value, self.size)
            .map_err(|e| Error::qr_encode(e.to_string()))?;
        Ok(QrImage {
            value,
            size: self.size,
            svg,
        })
    }

    /// Render the QR code for a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the address can't be encoded.
    pub fn present_text(&self) -> Result<String> {
        self.renderer
            .render_text(&self.value())
            .map_err(|e| Error::qr_encode(e.to_string()))
    }
}
