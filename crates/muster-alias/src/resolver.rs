//! Tiered alias matcher.

use tracing::debug;
use uuid::Uuid;

use crate::error::{ResolveError, Result};
use crate::suggest::suggest;
use crate::types::{AliasMatch, AliasResolution, MatchType, Workspace};

/// Length of a hyphenated UUID.
const WORKSPACE_ID_LEN: usize = 36;

/// Whether `target` is a literal workspace ID rather than an alias.
///
/// Only the hyphenated 36-character UUID form counts; simple, braced and URN
/// forms are treated as aliases.
pub fn is_workspace_id(target: &str) -> bool {
    target.len() == WORKSPACE_ID_LEN && Uuid::try_parse(target).is_ok()
}

/// Resolve `target` to a single workspace.
///
/// Literal workspace IDs are returned as-is without consulting `workspaces`.
/// Otherwise aliases are compared case-insensitively, one tier at a time:
/// exact, prefix, substring. The first tier with any hits decides: one hit
/// resolves, several are [`ResolveError::AmbiguousMatch`]. Lower tiers are
/// never consulted once a tier has hits.
pub fn resolve(target: &str, workspaces: &[Workspace]) -> Result<AliasResolution> {
    if target.is_empty() {
        return Err(ResolveError::EmptyTarget);
    }

    if is_workspace_id(target) {
        debug!(target, "target is a literal workspace id");
        return Ok(AliasResolution {
            workspace_id: target.to_string(),
            alias: String::new(),
            match_type: MatchType::Exact,
        });
    }

    if workspaces.is_empty() {
        return Err(ResolveError::NoWorkspaces);
    }

    let needle = target.to_lowercase();
    let aliases: Vec<String> = workspaces.iter().map(|w| w.alias.to_lowercase()).collect();

    for tier in MatchType::TIERS {
        let mut matches: Vec<AliasMatch> = workspaces
            .iter()
            .zip(&aliases)
            .filter(|(_, alias)| tier.matches(alias, &needle))
            .map(|(ws, _)| AliasMatch::from_workspace(ws, tier))
            .collect();

        match matches.len() {
            0 => continue,
            1 => {
                let found = matches.remove(0);
                debug!(target, %tier, workspace_id = %found.workspace_id, "alias resolved");
                return Ok(found.into());
            }
            n => {
                debug!(target, %tier, candidates = n, "alias is ambiguous");
                return Err(ResolveError::AmbiguousMatch {
                    target: target.to_string(),
                    tier,
                    matches,
                });
            }
        }
    }

    Err(ResolveError::NotFound {
        target: target.to_string(),
        suggestions: suggest(target, workspaces),
    })
}
