//! Deterministic rendering of resolution failures.
//!
//! These are pure functions of their inputs; [`ResolveError`](crate::ResolveError)
//! uses them for its `Display` output.

use std::fmt::Write;

use crate::types::{AliasMatch, Workspace};

/// Instruction appended to every ambiguity report.
pub const AMBIGUOUS_HINT: &str = "Use a more specific alias or the full workspace ID.";

/// Render an ambiguous match, listing candidates sorted by alias.
///
/// Ordering ignores case, with the raw alias breaking ties.
pub fn ambiguous(target: &str, matches: &[AliasMatch]) -> String {
    let mut sorted: Vec<&AliasMatch> = matches.iter().collect();
    sorted.sort_by_cached_key(|m| (m.alias.to_lowercase(), m.alias.clone()));

    let mut out = format!(
        "alias \"{}\" is ambiguous: matches {} workspaces\n",
        target,
        matches.len()
    );
    for m in sorted {
        let _ = writeln!(out, "  {}", entry(&m.alias, &m.human_name));
    }
    out.push_str(AMBIGUOUS_HINT);
    out
}

/// Render a failed lookup, with suggestions in ranked order when present.
pub fn not_found(target: &str, suggestions: &[Workspace]) -> String {
    let mut out = format!("no workspace found for alias \"{}\"", target);
    if !suggestions.is_empty() {
        out.push_str("\nDid you mean:");
        for ws in suggestions {
            let _ = write!(out, "\n  {}", entry(&ws.alias, &ws.human_name));
        }
    }
    out
}

fn entry(alias: &str, human_name: &str) -> String {
    if human_name.is_empty() {
        alias.to_string()
    } else {
        format!("{} ({})", alias, human_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchType;

    fn m(alias: &str, name: &str) -> AliasMatch {
        AliasMatch {
            workspace_id: format!("id-{}", alias),
            alias: alias.to_string(),
            human_name: name.to_string(),
            match_type: MatchType::Prefix,
        }
    }

    #[test]
    fn test_ambiguous_sorted_by_alias() {
        let text = ambiguous(
            "coord",
            &[m("coordinator-2", "Backup"), m("coordinator", "Main")],
        );
        assert_eq!(
            text,
            "alias \"coord\" is ambiguous: matches 2 workspaces\n\
             \x20 coordinator (Main)\n\
             \x20 coordinator-2 (Backup)\n\
             Use a more specific alias or the full workspace ID."
        );
    }

    #[test]
    fn test_ambiguous_sort_ignores_case() {
        let text = ambiguous(
            "a",
            &[m("Zeta-a", "Z"), m("alpha", "A"), m("Alpha", "B")],
        );
        let pos = |line: &str| text.find(line).unwrap();
        assert!(pos("  Alpha (B)") < pos("  alpha (A)"));
        assert!(pos("  alpha (A)") < pos("  Zeta-a (Z)"));
    }

    #[test]
    fn test_not_found_with_suggestions_keeps_rank_order() {
        let text = not_found(
            "cordinator",
            &[
                Workspace::new("1", "coordinator", "Main"),
                Workspace::new("2", "alpha", ""),
            ],
        );
        assert_eq!(
            text,
            "no workspace found for alias \"cordinator\"\n\
             Did you mean:\n\
             \x20 coordinator (Main)\n\
             \x20 alpha"
        );
    }

    #[test]
    fn test_not_found_without_suggestions() {
        assert_eq!(
            not_found("xyz123", &[]),
            "no workspace found for alias \"xyz123\""
        );
    }
}
