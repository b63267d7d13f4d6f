//! Health API.

use crate::client::MusterClient;
use crate::error::{Error, Result};
use crate::types::HealthResponse;

/// Health API client.
///
/// The health endpoint lives at the server root, outside `/api/v1`, and
/// does not require authentication.
pub struct HealthApi {
    client: MusterClient,
}

impl HealthApi {
    pub(crate) fn new(client: MusterClient) -> Self {
        Self { client }
    }

    /// Check basic health.
    pub async fn check(&self) -> Result<HealthResponse> {
        let inner = self.client.inner();
        let url = inner.base_url.join("health")?;

        let response = inner.http.get(url).timeout(inner.timeout).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Error::Api {
                status: response.status().as_u16(),
                code: "health_check_failed".to_string(),
                message: "Health check failed".to_string(),
            })
        }
    }

    /// Simple connectivity check - returns true if server is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.check().await.is_ok()
    }
}
