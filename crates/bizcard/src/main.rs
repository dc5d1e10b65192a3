//! `bizcard` - CLI for the digital business card
//!
//! This binary renders the card, saves the contact file, shows the QR code
//! and runs the share action from the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use bizcard::cli::{
    Cli, Command, ConfigCommand, ProfileCommand, QrCommand, RenderCommand, ShareCommand,
    VcardCommand,
};
use bizcard::{init_logging, CardView, Config, CopyFeedback, Profile, ShareOutcome};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> CliResult {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = cli.apply_overrides(Config::load_from(cli.config.clone())?);
    config.validate()?;

    match cli.command {
        Command::Render(cmd) => handle_render(&config, &cmd),
        Command::Vcard(cmd) => handle_vcard(&config, &cmd),
        Command::Qr(cmd) => handle_qr(&config, &cmd),
        Command::Share(cmd) => handle_share(&config, &cmd).await,
        Command::Profile(cmd) => handle_profile(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_view(config: &Config) -> Result<CardView, bizcard::Error> {
    let profile = Profile::load_or_bundled(config.profile.path.as_deref())?;
    CardView::from_config(config, profile)
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> CliResult {
    let view = load_view(config)?;

    if cmd.stdout {
        if cmd.qr {
            view.open_qr();
        }
        println!("{}", view.render()?);
        return Ok(());
    }

    let dir = cmd.output.clone().unwrap_or_else(|| config.output.dir.clone());
    let report = view.export(&dir)?;
    println!("Rendered card to {}", dir.display());
    println!("  Page:     {}", report.index.display());
    println!("  QR page:  {}", report.qr_page.display());
    println!("  QR image: {}", report.qr_image.display());
    println!("  Contact:  {}", report.contact.display());
    Ok(())
}

fn handle_vcard(config: &Config, cmd: &VcardCommand) -> CliResult {
    let view = load_view(config)?;
    let file = view.save_contact();

    if cmd.stdout {
        println!("{}", file.contents);
        return Ok(());
    }

    let dir = cmd.output.clone().unwrap_or_else(|| config.output.dir.clone());
    let path = file.write_to(&dir)?;
    println!("Saved contact to {}", path.display());
    Ok(())
}

fn handle_qr(config: &Config, cmd: &QrCommand) -> CliResult {
    let view = load_view(config)?;

    if let Some(path) = &cmd.svg {
        let image = view.qr().present()?;
        std::fs::write(path, &image.svg)?;
        println!("Wrote QR code for {} to {}", image.value, path.display());
        return Ok(());
    }

    println!("Scan to Connect");
    println!();
    println!("{}", view.qr().present_text()?);
    println!("{}", view.qr().value());
    Ok(())
}

async fn handle_share(config: &Config, cmd: &ShareCommand) -> CliResult {
    let mut view = load_view(config)?;
    let mut feedback = view.state().subscribe();

    let outcome = view.share().await;
    match outcome {
        ShareOutcome::Shared => println!("Shared {}", config.page.url),
        ShareOutcome::Dismissed => println!("Share dismissed"),
        ShareOutcome::Copied => println!("Link Copied! {}", config.page.url),
        ShareOutcome::CopyFailed => println!("Could not copy link: {}", config.page.url),
    }

    // Keep the process (and its clipboard ownership) alive while the feedback shows.
    if matches!(outcome, ShareOutcome::Copied | ShareOutcome::CopyFailed) && !cmd.no_wait {
        feedback
            .wait_for(|state| state.copy == CopyFeedback::Idle)
            .await?;
    }
    Ok(())
}

fn handle_profile(config: &Config, cmd: &ProfileCommand) -> CliResult {
    let profile = Profile::load_or_bundled(config.profile.path.as_deref())?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", profile.name);
    println!("{}", profile.title());
    println!();
    println!("  Phone:    {}", profile.mobile);
    println!("  Email:    {}", profile.email);
    println!("  Address:  {}", profile.address);
    if !profile.services.is_empty() {
        println!();
        println!("Services Offered");
        for service in &profile.services {
            println!("  - {service}");
        }
    }
    let links = profile.socials.links();
    if !links.is_empty() {
        println!();
        for link in links {
            println!("  {:<10}{}", link.label, link.url);
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> CliResult {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Page]");
                println!("  URL:                {}", config.page.url);
                println!();
                println!("[Profile]");
                match &config.profile.path {
                    Some(path) => println!("  Path:               {}", path.display()),
                    None => println!("  Path:               (bundled)"),
                }
                println!();
                println!("[Share]");
                if config.has_share_command() {
                    println!("  Command:            {}", config.share.command.join(" "));
                } else {
                    println!("  Command:            (none, clipboard fallback)");
                }
                println!();
                println!("[QR]");
                println!("  Size:               {}", config.qr.size);
                println!();
                println!("[Output]");
                println!("  Directory:          {}", config.output.dir.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
