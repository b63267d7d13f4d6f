//! Chat API.

use crate::client::MusterClient;
use crate::error::Result;
use crate::types::PendingChatResponse;

/// Chat API client.
pub struct ChatApi {
    client: MusterClient,
}

impl ChatApi {
    pub(crate) fn new(client: MusterClient) -> Self {
        Self { client }
    }

    /// Check for unread chat addressed to a workspace.
    pub async fn pending(&self, project: &str, workspace_id: &str) -> Result<PendingChatResponse> {
        self.client
            .get(&["projects", project, "workspaces", workspace_id, "chat", "pending"])
            .await
    }
}
