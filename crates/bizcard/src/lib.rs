//! `bizcard` - A digital business card
//!
//! This library renders a business card from a static profile: the card
//! page itself, a vCard contact file, a QR code of the page address and the
//! share action that hands the address to the platform or the clipboard.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod profile;
pub mod qr;
pub mod share;
pub mod social;
pub mod state;
pub mod vcard;
pub mod view;

pub use capability::{BarcodeRenderer, Clipboard, Location, SharePayload, Sharer};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use platform::Capabilities;
pub use profile::Profile;
pub use share::{ShareCoordinator, ShareOutcome};
pub use state::{CardState, CopyFeedback, UiState};
pub use vcard::{format_vcard, VCardFile};
pub use view::CardView;
