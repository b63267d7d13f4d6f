//! Resolve command - shows which workspace a target refers to.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::{Context, TargetResolver};

/// Arguments for the resolve command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Workspace alias (matched exactly, then by prefix, then by substring) or workspace ID
    pub target: String,
}

/// Run the resolve command.
pub async fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let resolution = TargetResolver::new(ctx).resolve(&args.target).await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else if resolution.is_literal() {
        println!("{}", resolution.workspace_id);
        if ctx.verbose {
            eprintln!("{}", Style::new().dim().apply_to("(literal workspace id)"));
        }
    } else {
        println!("{}", resolution.workspace_id);
        if ctx.verbose {
            eprintln!(
                "{}",
                Style::new().dim().apply_to(format!(
                    "({} match on alias '{}')",
                    resolution.match_type, resolution.alias
                ))
            );
        }
    }

    Ok(())
}
