//! Workspace directory records and resolution results.

use serde::{Deserialize, Serialize};

/// A workspace as listed by the coordination service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Opaque workspace identifier.
    #[serde(alias = "workspaceId", alias = "id")]
    pub workspace_id: String,
    /// Human-chosen short name.
    #[serde(default)]
    pub alias: String,
    /// Display name.
    #[serde(default, alias = "humanName", alias = "name")]
    pub human_name: String,
}

impl Workspace {
    /// Create a workspace record.
    pub fn new(
        workspace_id: impl Into<String>,
        alias: impl Into<String>,
        human_name: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            alias: alias.into(),
            human_name: human_name.into(),
        }
    }
}

/// How a target matched an alias, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Prefix,
    Substring,
}

impl MatchType {
    /// All tiers in the order they are probed.
    pub const TIERS: [MatchType; 3] = [MatchType::Exact, MatchType::Prefix, MatchType::Substring];

    /// Whether `alias` matches `target` at this tier.
    ///
    /// Both arguments must already be lower-cased.
    pub(crate) fn matches(self, alias: &str, target: &str) -> bool {
        match self {
            MatchType::Exact => alias == target,
            MatchType::Prefix => alias.starts_with(target),
            MatchType::Substring => alias.contains(target),
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Prefix => write!(f, "prefix"),
            MatchType::Substring => write!(f, "substring"),
        }
    }
}

/// A candidate produced while probing one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    pub workspace_id: String,
    pub alias: String,
    pub human_name: String,
    pub match_type: MatchType,
}

impl AliasMatch {
    pub(crate) fn from_workspace(workspace: &Workspace, match_type: MatchType) -> Self {
        Self {
            workspace_id: workspace.workspace_id.clone(),
            alias: workspace.alias.clone(),
            human_name: workspace.human_name.clone(),
            match_type,
        }
    }
}

/// A target resolved to a single workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasResolution {
    /// The resolved workspace ID.
    pub workspace_id: String,
    /// The matched alias; empty when the target was a literal ID.
    pub alias: String,
    /// The tier that produced the match.
    pub match_type: MatchType,
}

impl AliasResolution {
    /// Whether the target was taken as a literal workspace ID.
    pub fn is_literal(&self) -> bool {
        self.alias.is_empty()
    }
}

impl From<AliasMatch> for AliasResolution {
    fn from(m: AliasMatch) -> Self {
        Self {
            workspace_id: m.workspace_id,
            alias: m.alias,
            match_type: m.match_type,
        }
    }
}
