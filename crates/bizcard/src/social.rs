//! Social platforms shown in the card footer.
//!
//! The set of platforms is closed: each [`Platform`] knows its icon, its
//! colour class and which field of [`Socials`] holds its URL.

use serde::{Deserialize, Serialize};

/// Links to the profile's social accounts. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    /// Instagram profile URL.
    pub instagram: Option<String>,
    /// Facebook page URL.
    pub facebook: Option<String>,
    /// YouTube channel URL.
    pub youtube: Option<String>,
    /// `WhatsApp` chat URL.
    pub whatsapp: Option<String>,
}

/// A supported social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Instagram.
    Instagram,
    /// Facebook.
    Facebook,
    /// YouTube.
    Youtube,
    /// `WhatsApp`.
    Whatsapp,
}

impl Platform {
    /// All platforms, in footer display order.
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Youtube,
        Platform::Whatsapp,
    ];

    /// Icon identifier used by the view.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Youtube => "YouTube",
            Self::Whatsapp => "WhatsApp",
        }
    }

    /// Colour class of the icon.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Instagram => "text-pink-600",
            Self::Facebook => "text-blue-600",
            Self::Youtube => "text-red-600",
            Self::Whatsapp => "text-green-500",
        }
    }

    /// The configured URL for this platform, if any.
    #[must_use]
    pub fn url_in(self, socials: &Socials) -> Option<&str> {
        let field = match self {
            Self::Instagram => &socials.instagram,
            Self::Facebook => &socials.facebook,
            Self::Youtube => &socials.youtube,
            Self::Whatsapp => &socials.whatsapp,
        };
        field.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.icon())
    }
}

/// A platform paired with its configured URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// The platform.
    pub platform: Platform,
    /// Icon identifier.
    pub icon: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Colour class.
    pub color: &'static str,
    /// Target URL.
    pub url: String,
}

impl Socials {
    /// Links for every platform that has a URL, in display order.
    #[must_use]
    pub fn links(&self) -> Vec<SocialLink> {
        Platform::ALL
            .into_iter()
            .filter_map(|platform| {
                platform.url_in(self).map(|url| SocialLink {
                    platform,
                    icon: platform.icon(),
                    label: platform.label(),
                    color: platform.color(),
                    url: url.to_string(),
                })
            })
            .collect()
    }
}
