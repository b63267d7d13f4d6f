//! CLI command handlers.

pub mod chat;
pub mod config;
pub mod escalate;
pub mod notify;
pub mod resolve;
pub mod status;
pub mod workspaces;

use std::time::Duration;

use anyhow::{Context as _, Result};
use muster_alias::{AliasResolution, Workspace};
use muster_client::MusterClient;
use muster_config::MusterConfig;
use tracing::debug;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Merged configuration (files, env, flags).
    pub config: MusterConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an API client from the effective configuration.
    pub fn client(&self) -> Result<MusterClient> {
        self.config.validate().context("invalid configuration")?;

        let mut builder = MusterClient::builder()
            .base_url(self.config.server_url())
            .timeout(Duration::from_secs(self.config.timeout_secs()))
            .user_agent(format!("muster/{}", env!("CARGO_PKG_VERSION")));
        if let Some(token) = self
            .config
            .token()
            .context("failed to resolve auth token")?
        {
            builder = builder.auth_token(token);
        }
        Ok(builder.build()?)
    }

    /// The project every directory request is scoped to.
    pub fn project(&self) -> Result<&str> {
        Ok(self.config.require_project()?)
    }

    /// The server URL, for display.
    pub fn server_url(&self) -> &str {
        self.config.server_url()
    }
}

/// Resolves targets against one lazily fetched workspace snapshot.
///
/// Literal workspace IDs never trigger a fetch. The first alias does, and
/// every later alias reuses that snapshot.
pub struct TargetResolver<'a> {
    ctx: &'a Context,
    snapshot: Option<Vec<Workspace>>,
}

impl<'a> TargetResolver<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            snapshot: None,
        }
    }

    /// Resolve `target` to exactly one workspace.
    pub async fn resolve(&mut self, target: &str) -> Result<AliasResolution> {
        if target.is_empty() || muster_alias::is_workspace_id(target) {
            return Ok(muster_alias::resolve(target, &[])?);
        }

        let workspaces = self.snapshot().await?;
        Ok(muster_alias::resolve(target, workspaces)?)
    }

    /// ID of this agent's own workspace, when `[agent] workspace` is set.
    pub async fn own_workspace_id(&mut self) -> Result<Option<String>> {
        let ctx = self.ctx;
        let Some(own) = ctx.config.agent_workspace() else {
            return Ok(None);
        };
        let resolution = self
            .resolve(own)
            .await
            .context("failed to resolve [agent] workspace")?;
        Ok(Some(resolution.workspace_id))
    }

    /// The fetched workspace directory.
    pub async fn snapshot(&mut self) -> Result<&[Workspace]> {
        if self.snapshot.is_none() {
            let ctx = self.ctx;
            let project = ctx.project()?;
            let workspaces = ctx
                .client()?
                .workspaces()
                .list(project)
                .await
                .with_context(|| format!("failed to fetch workspaces for project '{}'", project))?;
            debug!(project, count = workspaces.len(), "workspace snapshot fetched");
            self.snapshot = Some(workspaces);
        }
        Ok(self.snapshot.as_deref().unwrap_or_default())
    }
}
