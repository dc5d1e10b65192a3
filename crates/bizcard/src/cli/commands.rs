//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Directory to write the site into (defaults to `output.dir`)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the page to stdout instead of writing the site
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Render with the QR overlay open (with --stdout)
    #[arg(long, requires = "stdout")]
    pub qr: bool,
}

/// Vcard command arguments.
#[derive(Debug, Args)]
pub struct VcardCommand {
    /// Directory to save the contact file into (defaults to `output.dir`)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the vCard to stdout instead of saving it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// QR command arguments.
#[derive(Debug, Args)]
pub struct QrCommand {
    /// Write an SVG image to this file instead of printing to the terminal
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,
}

/// Share command arguments.
#[derive(Debug, Args)]
pub struct ShareCommand {
    /// Exit right away instead of waiting for the copy feedback to clear
    #[arg(long)]
    pub no_wait: bool,
}

/// Profile command arguments.
#[derive(Debug, Args)]
pub struct ProfileCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses default if not specified)
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_debug() {
        let cmd = RenderCommand {
            output: Some(PathBuf::from("public")),
            stdout: false,
            qr: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("output"));
        assert!(debug_str.contains("public"));
    }

    #[test]
    fn test_vcard_command_debug() {
        let cmd = VcardCommand {
            output: None,
            stdout: true,
        };
        assert!(format!("{cmd:?}").contains("stdout"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
