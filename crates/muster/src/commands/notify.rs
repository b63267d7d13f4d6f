//! Notify command - send a notification to another workspace.

use anyhow::{Context as _, Result};
use clap::Args;
use console::Style;
use muster_client::SendNotificationRequest;

use super::{Context, TargetResolver};

/// Arguments for the notify command.
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Workspace to notify (alias or ID)
    pub target: String,

    /// Notification text
    pub message: String,
}

/// Run the notify command.
pub async fn run(args: NotifyArgs, ctx: &Context) -> Result<()> {
    let mut resolver = TargetResolver::new(ctx);
    let target = resolver.resolve(&args.target).await?;
    let from = resolver.own_workspace_id().await?;

    let request = SendNotificationRequest {
        workspace_id: target.workspace_id.clone(),
        message: args.message,
        from_workspace_id: from,
    };

    let project = ctx.project()?;
    let notification = ctx
        .client()?
        .notifications()
        .send(project, &request)
        .await
        .context("failed to send notification")?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&notification)?);
    } else {
        let status = if notification.delivered {
            Style::new().green().apply_to("delivered")
        } else {
            Style::new().yellow().apply_to("queued")
        };
        println!("Notification {} {}", notification.id, status);
    }

    Ok(())
}
