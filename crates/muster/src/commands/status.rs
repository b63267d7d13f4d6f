//! Status command - shows coordination server health.

use anyhow::Result;
use clap::Args;
use console::{Style, style};
use serde::Serialize;

use super::Context;

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// Status response for JSON output.
#[derive(Debug, Serialize)]
struct StatusOutput {
    running: bool,
    version: Option<String>,
    server_url: String,
    project: Option<String>,
}

/// Run the status command.
pub async fn run(_args: StatusArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let project = ctx.config.project_id().map(str::to_string);

    let health = client.health().check().await;

    if ctx.json_output {
        let output = StatusOutput {
            running: health.is_ok(),
            version: health.as_ref().ok().map(|h| h.version.clone()),
            server_url: ctx.server_url().to_string(),
            project,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    println!();
    println!("{}", style("Muster Server Status").bold());
    println!("{}", dim.apply_to("─".repeat(40)));
    println!();

    match &health {
        Ok(h) => {
            println!(
                "  {} {}",
                dim.apply_to("Status:"),
                Style::new().green().apply_to("● running")
            );
            println!("  {} {}", dim.apply_to("Version:"), h.version);
        }
        Err(e) if e.is_unreachable() => {
            println!(
                "  {} {}",
                dim.apply_to("Status:"),
                Style::new().red().apply_to("● unreachable")
            );
        }
        Err(_) => {
            println!(
                "  {} {}",
                dim.apply_to("Status:"),
                Style::new().yellow().apply_to("● unhealthy")
            );
        }
    }
    println!("  {} {}", dim.apply_to("Server:"), ctx.server_url());
    println!(
        "  {} {}",
        dim.apply_to("Project:"),
        project.as_deref().unwrap_or("(not set)")
    );

    if let Err(e) = &health
        && ctx.verbose
    {
        println!();
        println!("  {} {}", dim.apply_to("Error:"), e);
    }
    println!();

    Ok(())
}
