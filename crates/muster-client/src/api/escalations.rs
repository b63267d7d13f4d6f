//! Escalations API.

use crate::client::MusterClient;
use crate::error::Result;
use crate::types::{CreateEscalationRequest, Escalation};

/// Escalations API client.
pub struct EscalationsApi {
    client: MusterClient,
}

impl EscalationsApi {
    pub(crate) fn new(client: MusterClient) -> Self {
        Self { client }
    }

    /// Raise an escalation against a workspace.
    pub async fn create(
        &self,
        project: &str,
        request: &CreateEscalationRequest,
    ) -> Result<Escalation> {
        self.client
            .post(&["projects", project, "escalations"], request)
            .await
    }
}
