//! Command-line interface for bizcard.
//!
//! This module provides the CLI structure for the `bizcard` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ProfileCommand, QrCommand, RenderCommand, ShareCommand, VcardCommand,
};

use crate::config::Config;
use crate::logging::Verbosity;

/// bizcard - Your business card as a page, a contact file and a QR code
///
/// Renders a digital business card from a profile file, saves it as a
/// vCard, shows its address as a QR code and shares its link.
#[derive(Debug, Parser)]
#[command(name = "bizcard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile JSON file (overrides `profile.path`)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Public address of the card page (overrides `page.url`)
    #[arg(short, long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the card as a static site
    Render(RenderCommand),

    /// Save the contact as a vCard
    Vcard(VcardCommand),

    /// Show the page address as a QR code
    Qr(QrCommand),

    /// Share the page address, or copy it to the clipboard
    Share(ShareCommand),

    /// Show the loaded profile
    Profile(ProfileCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Apply command-line overrides to a loaded configuration.
    #[must_use]
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.page.url.clone_from(url);
        }
        if let Some(profile) = &self.profile {
            config.profile.path = Some(profile.clone());
        }
        config
    }
}
