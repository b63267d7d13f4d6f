//! Workspaces command - lists the project's workspace directory.

use anyhow::Result;
use clap::Args;
use console::{Style, style};

use super::{Context, TargetResolver};

/// Arguments for the workspaces command.
#[derive(Args, Debug)]
pub struct WorkspacesArgs {}

/// Run the workspaces command.
pub async fn run(_args: WorkspacesArgs, ctx: &Context) -> Result<()> {
    let mut resolver = TargetResolver::new(ctx);
    let mut workspaces = resolver.snapshot().await?.to_vec();
    workspaces.sort_by(|a, b| a.alias.cmp(&b.alias));

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&workspaces)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    println!("{}", style(format!("Workspaces in {}", ctx.project()?)).bold());
    println!("{}", dim.apply_to("─".repeat(60)));

    if workspaces.is_empty() {
        println!("{}", dim.apply_to("No workspaces registered"));
        return Ok(());
    }

    let width = workspaces
        .iter()
        .map(|w| w.alias.chars().count())
        .max()
        .unwrap_or(0);
    for ws in &workspaces {
        println!(
            "  {:<width$}  {}  {}",
            style(&ws.alias).cyan(),
            ws.human_name,
            dim.apply_to(&ws.workspace_id),
            width = width
        );
    }

    Ok(())
}
