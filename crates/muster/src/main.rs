//! Muster - command-line client for multi-agent coordination
//!
//! Main entry point for the Muster CLI.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use muster_config::{AuthConfig, MusterConfig, ProjectConfig, ServerConfig};
use tracing::warn;

mod commands;
mod output;

use commands::{chat, config, escalate, notify, resolve, status, workspaces};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Muster - command-line client for multi-agent coordination
#[derive(Parser)]
#[command(name = "muster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Server URL (default: http://localhost:7420)
    #[arg(long, global = true, env = "MUSTER_SERVER_URL")]
    pub server: Option<String>,

    /// Bearer token for the coordination server
    #[arg(long, global = true, env = "MUSTER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project ID
    #[arg(long, global = true, env = "MUSTER_PROJECT")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show coordination server health
    Status(status::StatusArgs),

    /// List workspaces in the project
    #[command(visible_alias = "ws")]
    Workspaces(workspaces::WorkspacesArgs),

    /// Resolve an alias or workspace ID to a workspace ID
    Resolve(resolve::ResolveArgs),

    /// Agent chat
    Chat(chat::ChatArgs),

    /// Raise an escalation against a workspace
    Escalate(escalate::EscalateArgs),

    /// Send a notification to a workspace
    Notify(notify::NotifyArgs),

    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Flag and environment overrides as the highest-precedence config layer.
    fn overrides(&self) -> MusterConfig {
        MusterConfig {
            server: self.server.as_ref().map(|url| ServerConfig {
                url: Some(url.clone()),
                ..Default::default()
            }),
            // Set wholesale by `apply_overrides`.
            auth: None,
            project: self.project.as_ref().map(|id| ProjectConfig { id: Some(id.clone()) }),
            agent: None,
        }
    }

    /// Layer flags over `config`.
    ///
    /// An explicit token replaces every file-configured token source, since
    /// `token_file` and `token_env` would otherwise take precedence over it.
    fn apply_overrides(&self, config: &mut MusterConfig) {
        config.merge(self.overrides());
        if let Some(token) = &self.token {
            config.auth = Some(AuthConfig {
                token: Some(token.clone()),
                ..Default::default()
            });
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console (human-readable, stderr) + rotating JSON file
    let filter = if cli.verbose {
        "muster=debug,muster_client=debug,muster_alias=debug,muster_config=debug,info"
    } else {
        "muster=info,warn"
    };
    let console_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    // No config dir means no log file; never write into the working directory.
    let file_appender = muster_config::xdg_config_dir().and_then(|dir| {
        tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .filename_prefix("muster")
            .filename_suffix("log")
            .build(dir.join("logs"))
            .ok()
    });
    let (file_writer, _guard) = match file_appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "muster=trace,muster_client=trace,muster_alias=trace,muster_config=trace,info",
                ))
        }))
        .init();

    // Layer flags and env over config files
    let loaded = muster_config::load_config(None).context("failed to load configuration")?;
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    let mut config = loaded.config;
    cli.apply_overrides(&mut config);

    // Create context for commands
    let ctx = commands::Context {
        config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Status(args) => status::run(args, &ctx).await,
        Commands::Workspaces(args) => workspaces::run(args, &ctx).await,
        Commands::Resolve(args) => resolve::run(args, &ctx).await,
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::Escalate(args) => escalate::run(args, &ctx).await,
        Commands::Notify(args) => notify::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}
