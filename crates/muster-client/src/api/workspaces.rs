//! Workspace directory API.

use crate::client::MusterClient;
use crate::error::Result;
use crate::types::{ListWorkspacesResponse, Workspace};

/// Workspace directory API client.
pub struct WorkspacesApi {
    client: MusterClient,
}

impl WorkspacesApi {
    pub(crate) fn new(client: MusterClient) -> Self {
        Self { client }
    }

    /// List every workspace registered in a project.
    pub async fn list(&self, project: &str) -> Result<Vec<Workspace>> {
        let response: ListWorkspacesResponse = self
            .client
            .get(&["projects", project, "workspaces"])
            .await?;
        tracing::debug!(project, count = response.workspaces.len(), "fetched workspaces");
        Ok(response.workspaces)
    }
}
