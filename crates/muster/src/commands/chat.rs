//! Chat command - pending message checks, optionally as hook output.

use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use clap::{Args, Subcommand};
use console::{Style, style};
use muster_client::PendingChatResponse;
use tracing::warn;

use super::{Context, TargetResolver};
use crate::output;

/// Hook event reported when none is given.
const DEFAULT_HOOK_EVENT: &str = "UserPromptSubmit";

/// Most messages listed in hook output.
const HOOK_PREVIEW_LIMIT: usize = 5;

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommand,
}

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    /// Check for unread chat addressed to this agent
    Pending(PendingArgs),
}

/// Arguments for `chat pending`.
#[derive(Args, Debug)]
pub struct PendingArgs {
    /// Workspace to check (alias or ID); defaults to [agent] workspace
    #[arg(long = "as", value_name = "TARGET")]
    pub as_workspace: Option<String>,

    /// Emit hook output: a boxed summary wrapped in hook JSON, nothing when idle
    #[arg(long)]
    pub hook: bool,

    /// Hook event name reported in hook output
    #[arg(long, default_value = DEFAULT_HOOK_EVENT)]
    pub hook_event: String,
}

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ChatCommand::Pending(args) => pending(args, ctx).await,
    }
}

async fn pending(args: PendingArgs, ctx: &Context) -> Result<()> {
    if args.hook {
        // A failing hook would block the agent that runs it.
        match fetch_pending(&args, ctx).await {
            Ok(pending) => {
                if let Some(text) = hook_text(&pending) {
                    let value = output::hook_output(&args.hook_event, &text);
                    println!("{}", serde_json::to_string(&value)?);
                }
            }
            Err(e) => warn!(error = %format!("{:#}", e), "pending chat check failed"),
        }
        return Ok(());
    }

    let pending = fetch_pending(&args, ctx).await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&pending)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    if !pending.has_pending() {
        println!("{}", dim.apply_to("No pending messages"));
        return Ok(());
    }

    println!("{}", style(summary_line(pending.count)).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
    let now = Utc::now();
    for msg in &pending.messages {
        println!(
            "{} {} {}",
            style(sender(msg)).cyan(),
            dim.apply_to(format!("({})", output::age(msg.sent_at, now))),
            output::truncate(&msg.body, 60)
        );
    }
    let listed = pending.messages.len();
    if pending.count > listed {
        println!(
            "{}",
            dim.apply_to(format!("... and {} more", pending.count - listed))
        );
    }

    Ok(())
}

async fn fetch_pending(args: &PendingArgs, ctx: &Context) -> Result<PendingChatResponse> {
    let Some(target) = args
        .as_workspace
        .as_deref()
        .or_else(|| ctx.config.agent_workspace())
    else {
        bail!("no workspace to check: pass --as or set [agent] workspace in muster.toml");
    };

    let resolution = TargetResolver::new(ctx).resolve(target).await?;
    let project = ctx.project()?;

    ctx.client()?
        .chat()
        .pending(project, &resolution.workspace_id)
        .await
        .context("failed to check pending chat")
}

/// Boxed summary for hook output, or `None` when nothing is waiting.
fn hook_text(pending: &PendingChatResponse) -> Option<String> {
    if !pending.has_pending() {
        return None;
    }

    let now = Utc::now();
    let mut lines: Vec<String> = pending
        .messages
        .iter()
        .take(HOOK_PREVIEW_LIMIT)
        .map(|m| format!("{} ({}): {}", sender(m), output::age(m.sent_at, now), m.body))
        .collect();
    let listed = lines.len();
    if pending.count > listed {
        lines.push(format!("... and {} more", pending.count - listed));
    }

    Some(output::render_box(&summary_line(pending.count), &lines))
}

fn summary_line(count: usize) -> String {
    if count == 1 {
        "1 pending chat message".to_string()
    } else {
        format!("{} pending chat messages", count)
    }
}

fn sender(msg: &muster_client::ChatMessage) -> &str {
    if msg.from_alias.is_empty() {
        &msg.from_workspace_id
    } else {
        &msg.from_alias
    }
}
