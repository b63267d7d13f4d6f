//! Resolution error types.

use crate::format;
use crate::types::{AliasMatch, MatchType, Workspace};

/// Result type alias for alias resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Why a target could not be resolved to a single workspace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The target string was empty.
    #[error("workspace target is empty")]
    EmptyTarget,

    /// The workspace directory had no entries.
    #[error("no workspaces are registered in this project")]
    NoWorkspaces,

    /// More than one workspace matched at the first tier with hits.
    #[error("{}", format::ambiguous(.target, .matches))]
    AmbiguousMatch {
        target: String,
        tier: MatchType,
        matches: Vec<AliasMatch>,
    },

    /// Nothing matched at any tier.
    #[error("{}", format::not_found(.target, .suggestions))]
    NotFound {
        target: String,
        suggestions: Vec<Workspace>,
    },
}
