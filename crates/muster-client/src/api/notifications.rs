//! Notifications API.

use crate::client::MusterClient;
use crate::error::Result;
use crate::types::{Notification, SendNotificationRequest};

/// Notifications API client.
pub struct NotificationsApi {
    client: MusterClient,
}

impl NotificationsApi {
    pub(crate) fn new(client: MusterClient) -> Self {
        Self { client }
    }

    /// Send a notification to a workspace.
    pub async fn send(
        &self,
        project: &str,
        request: &SendNotificationRequest,
    ) -> Result<Notification> {
        self.client
            .post(&["projects", project, "notifications"], request)
            .await
    }
}
