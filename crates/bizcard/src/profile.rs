//! The profile shown on the card.
//!
//! A [`Profile`] is loaded once at startup and shared read-only between the
//! view, the contact formatter and the share coordinator.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::social::Socials;

/// Title shown when the profile has no designation.
pub const DEFAULT_DESIGNATION: &str = "Service Provider";

/// Profile bundled into the binary, used when no profile file is configured.
const BUNDLED_PROFILE: &str = include_str!("../data/profile.json");

/// The person or business on the card.
///
/// Missing fields deserialize to blank values; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Job title. Falls back to [`DEFAULT_DESIGNATION`].
    pub designation: Option<String>,
    /// Mobile phone number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Postal address, single line.
    pub address: String,
    /// Services offered, in display order.
    pub services: Vec<String>,
    /// Social account links.
    pub socials: Socials,
}

impl Profile {
    /// Parse a profile from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON for a profile.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The profile bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails to parse.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PROFILE)
    }

    /// Load a profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading profile");
        let json = std::fs::read_to_string(path).map_err(|source| Error::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| Error::ProfileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else use the bundled profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile can't be loaded.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// The title to display: the designation, or the default label when absent or empty.
    #[must_use]
    pub fn title(&self) -> &str {
        self.designation
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESIGNATION)
    }
}
