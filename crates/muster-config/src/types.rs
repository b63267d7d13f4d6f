//! Configuration types.
//!
//! ```toml
//! [server]
//! url = "http://localhost:7420"
//! timeout_secs = 30
//!
//! [auth]
//! token_env = "MUSTER_TOKEN"
//!
//! [project]
//! id = "my-project"
//!
//! [agent]
//! workspace = "coordinator"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Server URL used when no layer sets one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:7420";

/// Request timeout used when no layer sets one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration.
///
/// Every section is optional so that layers can be merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusterConfig {
    /// Coordination server connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    /// Project selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectConfig>,

    /// Identity of the agent running this client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentConfig>,
}

/// `[server]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the coordination service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// `[auth]` section.
///
/// Resolution order: `token_file`, then `token_env`, then inline `token`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Inline bearer token (discouraged).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Environment variable holding the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
    /// File holding the token. `~/` is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

/// `[project]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project identifier on the coordination service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// `[agent]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// This agent's own workspace, as an alias or literal ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl MusterConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config written by `muster config init`.
    pub fn starter() -> Self {
        Self {
            server: Some(ServerConfig {
                url: Some(DEFAULT_SERVER_URL.to_string()),
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            }),
            auth: Some(AuthConfig {
                token_env: Some("MUSTER_TOKEN".to_string()),
                ..Default::default()
            }),
            project: None,
            agent: None,
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another config on top of this one (other takes priority).
    ///
    /// Fields are merged individually, so a project file that only sets
    /// `[project] id` keeps the user's server and auth settings.
    pub fn merge(&mut self, other: MusterConfig) {
        if let Some(server) = other.server {
            let base = self.server.get_or_insert_with(Default::default);
            merge_opt(&mut base.url, server.url);
            merge_opt(&mut base.timeout_secs, server.timeout_secs);
        }
        if let Some(auth) = other.auth {
            let base = self.auth.get_or_insert_with(Default::default);
            merge_opt(&mut base.token, auth.token);
            merge_opt(&mut base.token_env, auth.token_env);
            merge_opt(&mut base.token_file, auth.token_file);
        }
        if let Some(project) = other.project {
            let base = self.project.get_or_insert_with(Default::default);
            merge_opt(&mut base.id, project.id);
        }
        if let Some(agent) = other.agent {
            let base = self.agent.get_or_insert_with(Default::default);
            merge_opt(&mut base.workspace, agent.workspace);
        }
    }

    /// Effective server URL.
    pub fn server_url(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.url.as_deref())
            .unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Effective request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.server
            .as_ref()
            .and_then(|s| s.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Configured project ID, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.id.as_deref())
    }

    /// Configured project ID, or an error naming where to set it.
    pub fn require_project(&self) -> Result<&str> {
        self.project_id().ok_or_else(|| ConfigError::Missing {
            field: "project.id".to_string(),
            hint: "muster.toml, --project, or MUSTER_PROJECT".to_string(),
        })
    }

    /// This agent's own workspace, if configured.
    pub fn agent_workspace(&self) -> Option<&str> {
        self.agent.as_ref().and_then(|a| a.workspace.as_deref())
    }

    /// Resolve the bearer token, if any source provides one.
    pub fn token(&self) -> Result<Option<String>> {
        match &self.auth {
            Some(auth) => auth.resolve(),
            None => Ok(None),
        }
    }

    /// Check that every set value is usable.
    pub fn validate(&self) -> Result<()> {
        let url = self.server_url();
        let parsed = url::Url::parse(url).map_err(|e| ConfigError::Invalid {
            field: "server.url".to_string(),
            reason: format!("'{}' is not a valid URL: {}", url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                field: "server.url".to_string(),
                reason: format!("scheme must be http or https, got '{}'", parsed.scheme()),
            });
        }

        if self.timeout_secs() == 0 {
            return Err(ConfigError::Invalid {
                field: "server.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if let Some(id) = self.project_id()
            && id.trim().is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "project.id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Whether any layer stored a token in plaintext.
    pub fn has_plaintext_token(&self) -> bool {
        self.auth.as_ref().is_some_and(|a| a.token.is_some())
    }
}

impl AuthConfig {
    /// Resolve the actual token value.
    pub fn resolve(&self) -> Result<Option<String>> {
        if let Some(path) = &self.token_file {
            let expanded = expand_path(path);
            if expanded.exists() {
                let token = std::fs::read_to_string(&expanded)
                    .map_err(|e| ConfigError::ReadFile {
                        path: expanded.display().to_string(),
                        source: e,
                    })?
                    .trim()
                    .to_string();
                if !token.is_empty() {
                    return Ok(Some(token));
                }
            }
        }
        if let Some(var) = &self.token_env
            && let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            return Ok(Some(token));
        }
        Ok(self.token.clone().filter(|t| !t.is_empty()))
    }
}

fn merge_opt<T>(base: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *base = other;
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_path(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str()
        && let Some(rest) = s.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
