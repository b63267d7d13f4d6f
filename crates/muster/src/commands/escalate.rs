//! Escalate command - raise an escalation against another workspace.

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use console::Style;
use muster_client::{CreateEscalationRequest, Priority};

use super::{Context, TargetResolver};

/// Arguments for the escalate command.
#[derive(Args, Debug)]
pub struct EscalateArgs {
    /// Workspace to escalate to (alias or ID)
    pub target: String,

    /// One-line summary of the problem
    #[arg(short, long)]
    pub summary: String,

    /// Longer description
    #[arg(short, long)]
    pub details: Option<String>,

    /// Escalation priority
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Normal)]
    pub priority: PriorityArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Normal,
    High,
    Urgent,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::High => Priority::High,
            PriorityArg::Urgent => Priority::Urgent,
        }
    }
}

/// Run the escalate command.
pub async fn run(args: EscalateArgs, ctx: &Context) -> Result<()> {
    let mut resolver = TargetResolver::new(ctx);
    let target = resolver.resolve(&args.target).await?;
    let from = resolver.own_workspace_id().await?;

    let request = CreateEscalationRequest {
        workspace_id: target.workspace_id.clone(),
        from_workspace_id: from,
        summary: args.summary,
        details: args.details,
        priority: args.priority.into(),
    };

    let project = ctx.project()?;
    let escalation = ctx
        .client()?
        .escalations()
        .create(project, &request)
        .await
        .context("failed to create escalation")?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&escalation)?);
    } else {
        let shown = if target.is_literal() {
            target.workspace_id.as_str()
        } else {
            target.alias.as_str()
        };
        println!(
            "{} Escalation {} raised to {} ({} priority)",
            Style::new().green().apply_to("✓"),
            escalation.id,
            shown,
            request.priority
        );
    }

    Ok(())
}
