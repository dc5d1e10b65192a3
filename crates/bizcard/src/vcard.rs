//! vCard export of the profile.
//!
//! Builds the vCard 3.0 text behind the "Save Contact" action, along with
//! the name and MIME type of the downloadable file.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use crate::error::{Error, Result};
use crate::profile::Profile;

/// MIME type of the downloadable contact file.
pub const VCARD_MIME_TYPE: &str = "text/vcard;charset=utf-8";

/// vCard line terminator.
const CRLF: &str = "\r\n";

/// Format `profile` as a vCard, with `page_url` as the website field.
///
/// Fields are written exactly as given; empty fields produce empty entries.
#[must_use]
pub fn format_vcard(profile: &Profile, page_url: &str) -> String {
    let name = &profile.name;
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{name}"),
        format!("N:;{name};;;"),
        format!("TITLE:{}", profile.title()),
        format!("TEL;TYPE=CELL:{}", profile.mobile),
        format!("EMAIL;TYPE=WORK:{}", profile.email),
        format!("ADR;TYPE=WORK:;;{};;;;", profile.address),
        format!("URL;TYPE=Website:{page_url}"),
        "END:VCARD".to_string(),
    ]
    .join(CRLF)
}

/// Download filename for a contact: whitespace runs become `_`, then `_Contact.vcf`.
#[must_use]
pub fn download_filename(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace =
        WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
    format!("{}_Contact.vcf", whitespace.replace_all(name, "_"))
}

/// A contact file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardFile {
    /// Filename offered for download.
    pub filename: String,
    /// MIME type of the contents.
    pub mime_type: &'static str,
    /// vCard text.
    pub contents: String,
}

impl VCardFile {
    /// Build the contact file for `profile`.
    #[must_use]
    pub fn for_profile(profile: &Profile, page_url: &str) -> Self {
        Self {
            filename: download_filename(&profile.name),
            mime_type: VCARD_MIME_TYPE,
            contents: format_vcard(profile, page_url),
        }
    }

    /// Name of the file on disk.
    ///
    /// Path separators become `_` and leading dots are dropped, so the file
    /// always lands directly inside the target directory.
    #[must_use]
    pub fn disk_filename(&self) -> String {
        let flat = self.filename.replace(['/', '\\'], "_");
        flat.trim_start_matches('.').to_string()
    }

    /// Write the file into `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file can't be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(self.disk_filename());
        std::fs::write(&path, &self.contents).map_err(|source| Error::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Saved contact");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            designation: Some("Plumber".to_string()),
            mobile: "+1-555-0100".to_string(),
            email: "jane@x.com".to_string(),
            address: "12 Elm St".to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_format_vcard_fields() {
        let card = format_vcard(&jane(), "https://cards.example.com/jane");
        let lines: Vec<&str> = card.split(CRLF).collect();

        assert!(lines.contains(&"FN:Jane Doe"));
        assert!(lines.contains(&"N:;Jane Doe;;;"));
        assert!(lines.contains(&"TITLE:Plumber"));
        assert!(lines.contains(&"TEL;TYPE=CELL:+1-555-0100"));
        assert!(lines.contains(&"EMAIL;TYPE=WORK:jane@x.com"));
        assert!(lines.contains(&"ADR;TYPE=WORK:;;12 Elm St;;;;"));
        assert!(lines.contains(&"URL;TYPE=Website:https://cards.example.com/jane"));
    }

    #[test]
    fn test_format_vcard_is_well_formed() {
        let card = format_vcard(&jane(), "https://example.com/");
        assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(card.ends_with("END:VCARD"));
        assert_eq!(card.matches("BEGIN:VCARD").count(), 1);
        assert_eq!(card.lines().count(), 10);
    }

    #[test]
    fn test_format_vcard_default_title() {
        let profile = Profile {
            designation: None,
            ..jane()
        };
        let card = format_vcard(&profile, "");
        assert!(card.contains("\r\nTITLE:Service Provider\r\n"));
    }

    #[test]
    fn test_format_vcard_empty_profile() {
        let card = format_vcard(&Profile::default(), "");
        assert!(card.contains("\r\nFN:\r\n"));
        assert!(card.contains("\r\nADR;TYPE=WORK:;;;;;;\r\n"));
        assert!(card.ends_with("URL;TYPE=Website:\r\nEND:VCARD"));
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("Jane Doe"), "Jane_Doe_Contact.vcf");
        assert_eq!(download_filename("Jane   Q.\tDoe"), "Jane_Q._Doe_Contact.vcf");
        assert_eq!(download_filename("Cher"), "Cher_Contact.vcf");
        assert_eq!(download_filename(""), "_Contact.vcf");
    }

    #[test]
    fn test_vcard_file_for_profile() {
        let file = VCardFile::for_profile(&jane(), "https://example.com/");
        assert_eq!(file.filename, "Jane_Doe_Contact.vcf");
        assert_eq!(file.mime_type, "text/vcard;charset=utf-8");
        assert!(file.contents.contains("FN:Jane Doe"));
    }

    #[test]
    fn test_vcard_file_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("downloads");
        let file = VCardFile::for_profile(&jane(), "https://example.com/");

        let path = file.write_to(&out).unwrap();
        assert_eq!(path, out.join("Jane_Doe_Contact.vcf"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), file.contents);
    }

    fn named(name: &str) -> VCardFile {
        let profile = Profile {
            name: name.to_string(),
            ..jane()
        };
        VCardFile::for_profile(&profile, "https://example.com/")
    }

    #[test]
    fn test_disk_filename_flattens_separators() {
        let file = named("AC/DC Repairs");
        assert_eq!(file.filename, "AC/DC_Repairs_Contact.vcf");
        assert_eq!(file.disk_filename(), "AC_DC_Repairs_Contact.vcf");
        assert_eq!(named(r"A\B").disk_filename(), "A_B_Contact.vcf");
    }

    #[test]
    fn test_disk_filename_drops_leading_dots() {
        assert_eq!(named("../escaped").disk_filename(), "_escaped_Contact.vcf");
        assert_eq!(named(".hidden").disk_filename(), "hidden_Contact.vcf");
    }

    #[test]
    fn test_write_to_separator_in_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = named("AC/DC Repairs").write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("AC_DC_Repairs_Contact.vcf"));
        assert!(path.is_file());
    }

    #[test]
    fn test_write_to_stays_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");

        let path = named("../escaped").write_to(&out).unwrap();

        assert_eq!(path.parent(), Some(out.as_path()));
        assert!(path.is_file());
        assert!(!dir.path().join("escaped_Contact.vcf").exists());
    }
}
