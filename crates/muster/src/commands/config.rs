//! Config command - configuration management.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use console::Style;
use muster_config::{MusterConfig, PROJECT_CONFIG_FILE};

use super::Context;

/// Shown in place of inline tokens.
const REDACTED: &str = "********";

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration and where it came from
    Show,

    /// Show configuration file paths
    Path,

    /// Write a starter config file
    Init {
        /// Create project-local config (./muster.toml) instead of user config
        #[arg(long)]
        local: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Path => cmd_path(),
        ConfigCommand::Init { local, force } => cmd_init(local, force),
    }
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let shown = redacted(&ctx.config);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    let loaded = muster_config::load_config(None)?;
    let sources = loaded.loaded_from();
    if sources.is_empty() {
        println!("{}", dim.apply_to("# No config files loaded (using defaults)"));
    } else {
        for source in &sources {
            println!("{}", dim.apply_to(format!("# from {}", source.display())));
        }
    }
    for warning in &loaded.warnings {
        println!("{}", Style::new().yellow().apply_to(format!("# warning: {}", warning)));
    }
    println!();

    let body = shown.to_toml()?;
    if body.trim().is_empty() {
        println!("{}", dim.apply_to("# (empty)"));
    } else {
        print!("{}", body);
    }
    println!();
    println!("{}", dim.apply_to(format!("# effective server: {}", ctx.server_url())));

    Ok(())
}

fn cmd_path() -> Result<()> {
    match muster_config::xdg_config_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Could not determine config directory"),
    }
    println!("{}", PathBuf::from(PROJECT_CONFIG_FILE).display());
    Ok(())
}

fn cmd_init(local: bool, force: bool) -> Result<()> {
    let path = if local {
        PathBuf::from(PROJECT_CONFIG_FILE)
    } else {
        muster_config::xdg_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?
    };

    if path.exists() && !force {
        println!("Config file already exists: {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    muster_config::save_config(&MusterConfig::starter(), &path)?;
    println!(
        "{} Created {}",
        Style::new().green().apply_to("✓"),
        path.display()
    );
    Ok(())
}

/// Copy of `config` with any inline token masked.
fn redacted(config: &MusterConfig) -> MusterConfig {
    let mut shown = config.clone();
    if let Some(token) = shown.auth.as_mut().and_then(|a| a.token.as_mut()) {
        *token = REDACTED.to_string();
    }
    shown
}
