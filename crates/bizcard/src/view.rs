//! The card view.
//!
//! [`CardView`] composes the profile, the transient UI state, the share
//! coordinator and the QR presenter into an HTML page. Rendering is a pure
//! function of the profile and a [`UiState`] snapshot; the actions
//! (`open_qr`, `close_qr`, `share`, `save_contact`) only touch the state.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use minijinja::Environment;
use serde::Serialize;
use tracing::{debug, info};

use crate::capability::{Location, SharePayload};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::Capabilities;
use crate::profile::Profile;
use crate::qr::QrPresenter;
use crate::share::{ShareCoordinator, ShareOutcome};
use crate::social::SocialLink;
use crate::state::{CardState, CopyFeedback, UiState};
use crate::vcard::VCardFile;

const CARD_TEMPLATE_NAME: &str = "card.html";
const CARD_TEMPLATE: &str = include_str!("templates/card.html");

/// Page with the QR overlay closed.
pub const INDEX_PAGE: &str = "index.html";
/// Page with the QR overlay open.
pub const QR_PAGE: &str = "qr.html";
/// Standalone QR image.
pub const QR_IMAGE: &str = "qr.svg";

/// Kind of contact row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Phone number, linked with `tel:`.
    Phone,
    /// Email address, linked with `mailto:`.
    Email,
    /// Postal address, plain text.
    Address,
}

/// One contact row of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    /// What the row shows.
    pub kind: ContactKind,
    /// Icon identifier.
    pub icon: &'static str,
    /// Displayed text.
    pub text: String,
    /// Link target, if the row is clickable.
    pub href: Option<String>,
}

impl ContactRow {
    fn phone(mobile: &str) -> Self {
        Self {
            kind: ContactKind::Phone,
            icon: "phone",
            text: mobile.to_string(),
            href: Some(format!("tel:{mobile}")),
        }
    }

    fn email(email: &str) -> Self {
        Self {
            kind: ContactKind::Email,
            icon: "mail",
            text: email.to_string(),
            href: Some(format!("mailto:{email}")),
        }
    }

    fn address(address: &str) -> Self {
        Self {
            kind: ContactKind::Address,
            icon: "map-pin",
            text: address.to_string(),
            href: None,
        }
    }
}

/// Everything the card template needs.
#[derive(Debug, Clone, Serialize)]
pub struct CardModel {
    /// Profile name.
    pub name: String,
    /// Designation or the default label.
    pub title: String,
    /// Phone, email and address rows.
    pub contacts: Vec<ContactRow>,
    /// Services, in profile order.
    pub services: Vec<String>,
    /// Configured social links.
    pub socials: Vec<SocialLink>,
    /// What the page's share buttons hand to the browser.
    pub share: SharePayload,
    /// Download filename of the contact file.
    pub contact_file: String,
    /// Link to the exported contact file.
    pub contact_href: String,
    /// MIME type of the contact file.
    pub contact_mime: &'static str,
    /// Label of the share buttons.
    pub share_label: &'static str,
    /// Extra CSS class of the share buttons.
    pub share_class: &'static str,
    /// Whether the QR overlay is shown.
    pub show_qr: bool,
    /// Value encoded in the QR code.
    pub qr_value: String,
    /// QR code SVG markup, present only when the overlay is shown.
    pub qr_svg: Option<String>,
    /// QR edge length in pixels.
    pub qr_size: u32,
    /// Link that opens the QR overlay.
    pub qr_href: &'static str,
    /// Link that closes the QR overlay.
    pub close_href: &'static str,
}

/// Files written by [`CardView::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Page with the overlay closed.
    pub index: PathBuf,
    /// Page with the overlay open.
    pub qr_page: PathBuf,
    /// QR code image.
    pub qr_image: PathBuf,
    /// Contact file.
    pub contact: PathBuf,
}

/// A rendered business card and its actions.
pub struct CardView {
    profile: Arc<Profile>,
    state: CardState,
    location: Arc<dyn Location>,
    coordinator: ShareCoordinator,
    qr: QrPresenter,
    templates: Environment<'static>,
}

impl fmt::Debug for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardView")
            .field("profile", &self.profile.name)
            .field("state", &self.state.snapshot())
            .field("qr", &self.qr)
            .finish_non_exhaustive()
    }
}

impl CardView {
    /// Create a view of `profile` running against `capabilities`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card template fails to compile.
    pub fn new(profile: Arc<Profile>, capabilities: Capabilities) -> Result<Self> {
        let mut templates = Environment::new();
        templates.add_template(CARD_TEMPLATE_NAME, CARD_TEMPLATE)?;

        let state = CardState::new();
        let coordinator = ShareCoordinator::new(
            capabilities.sharer,
            capabilities.clipboard,
            Arc::clone(&capabilities.location),
            state.clone(),
        );
        let qr = QrPresenter::new(capabilities.renderer, Arc::clone(&capabilities.location));

        Ok(Self {
            profile,
            state,
            location: capabilities.location,
            coordinator,
            qr,
            templates,
        })
    }

    /// Create a view with the system capabilities described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card template fails to compile.
    pub fn from_config(config: &Config, profile: Profile) -> Result<Self> {
        let view = Self::new(Arc::new(profile), Capabilities::system(config))?;
        Ok(view.with_qr_size(config.qr.size))
    }

    /// Set the QR image size in pixels.
    #[must_use]
    pub fn with_qr_size(mut self, size: u32) -> Self {
        self.qr = self.qr.with_size(size);
        self
    }

    /// The profile shown on the card.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The view's transient state.
    #[must_use]
    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// The QR presenter.
    #[must_use]
    pub fn qr(&self) -> &QrPresenter {
        &self.qr
    }

    /// Show the QR overlay.
    pub fn open_qr(&self) {
        debug!("Opening QR overlay");
        self.state.set_show_qr(true);
    }

    /// Hide the QR overlay.
    pub fn close_qr(&self) {
        debug!("Closing QR overlay");
        self.state.set_show_qr(false);
    }

    /// Run the share action.
    pub async fn share(&mut self) -> ShareOutcome {
        self.coordinator.share(&self.profile).await
    }

    /// The contact file behind "Save Contact".
    #[must_use]
    pub fn save_contact(&self) -> VCardFile {
        VCardFile::for_profile(&self.profile, &self.location.current_address())
    }

    /// Build the template model for `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the QR code is needed and can't be rendered.
    pub fn model(&self, state: UiState) -> Result<CardModel> {
        let profile = &self.profile;
        let contact = self.save_contact();
        let (share_label, share_class) = match state.copy {
            CopyFeedback::Idle => ("Share Link", ""),
            CopyFeedback::Copied => ("Link Copied!", " copied"),
            CopyFeedback::Failed => ("Copy Failed", " failed"),
        };
        let qr_svg = if state.show_qr {
            Some(strip_xml_prolog(&self.qr.present()?.svg).to_string())
        } else {
            None
        };

        Ok(CardModel {
            name: profile.name.clone(),
            title: profile.title().to_string(),
            contacts: vec![
                ContactRow::phone(&profile.mobile),
                ContactRow::email(&profile.email),
                ContactRow::address(&profile.address),
            ],
            services: profile.services.clone(),
            socials: profile.socials.links(),
            share: SharePayload::for_card(&profile.name, self.location.current_address()),
            contact_href: contact.disk_filename(),
            contact_file: contact.filename,
            contact_mime: contact.mime_type,
            share_label,
            share_class,
            show_qr: state.show_qr,
            qr_value: self.qr.value(),
            qr_svg,
            qr_size: self.qr.size(),
            qr_href: QR_PAGE,
            close_href: INDEX_PAGE,
        })
    }

    /// Render the card in its current state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self) -> Result<String> {
        self.render_state(self.state.snapshot())
    }

    /// Render the card as it looks in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_state(&self, state: UiState) -> Result<String> {
        let model = self.model(state)?;
        let template = self.templates.get_template(CARD_TEMPLATE_NAME)?;
        Ok(template.render(&model)?)
    }

    /// Write the static site into `dir`: both pages, the QR image and the contact file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn export(&self, dir: &Path) -> Result<ExportReport> {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;

        let current = self.state.snapshot();
        let closed = UiState {
            show_qr: false,
            ..current
        };
        let open = UiState {
            show_qr: true,
            ..current
        };

        let index = dir.join(INDEX_PAGE);
        write_file(&index, &self.render_state(closed)?)?;

        let qr_page = dir.join(QR_PAGE);
        write_file(&qr_page, &self.render_state(open)?)?;

        let qr_image = dir.join(QR_IMAGE);
        write_file(&qr_image, &self.qr.present()?.svg)?;

        let contact = self.save_contact().write_to(dir)?;

        info!(dir = %dir.display(), "Exported card");
        Ok(ExportReport {
            index,
            qr_page,
            qr_image,
            contact,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_xml_prolog(svg: &str) -> &str {
    svg.find("<svg").map_or(svg, |start| &svg[start..])
}
