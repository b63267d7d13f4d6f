//! "Did you mean" suggestions ranked by edit distance.

use crate::types::Workspace;

/// Maximum number of suggestions returned by [`suggest`].
pub const MAX_SUGGESTIONS: usize = 3;

/// Extra edits tolerated on top of half the longer string's length.
const DISTANCE_SLACK: usize = 3;

/// Levenshtein distance over Unicode scalar values.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// Rank workspaces whose alias is close to `target`.
///
/// A workspace is admitted when its distance is at most half the longer of
/// the two strings plus three. Ties keep directory order. Workspaces without
/// an alias are never suggested.
pub fn suggest(target: &str, workspaces: &[Workspace]) -> Vec<Workspace> {
    let target = target.to_lowercase();
    let target_len = target.chars().count();

    let mut scored: Vec<(usize, &Workspace)> = workspaces
        .iter()
        .filter(|ws| !ws.alias.is_empty())
        .filter_map(|ws| {
            let alias = ws.alias.to_lowercase();
            let distance = edit_distance(&target, &alias);
            let limit = target_len.max(alias.chars().count()) / 2 + DISTANCE_SLACK;
            (distance <= limit).then_some((distance, ws))
        })
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, ws)| ws.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws(alias: &str) -> Workspace {
        Workspace::new(format!("id-{}", alias), alias, alias.to_uppercase())
    }

    #[test]
    fn test_distance_identity() {
        for s in ["", "a", "coordinator", "ünïcødé"] {
            assert_eq!(edit_distance(s, s), 0);
        }
    }

    #[test]
    fn test_distance_empty_operand() {
        assert_eq!(edit_distance("", "hello"), 5);
        assert_eq!(edit_distance("hello", ""), 5);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_distance_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("abc", "abd"), 1);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_distance_counts_codepoints() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_suggest_rejects_distant_aliases() {
        let pool = vec![ws("coordinator"), ws("bob-agent")];
        assert!(suggest("xyz123", &pool).is_empty());
    }

    #[test]
    fn test_suggest_ranks_closer_alias_first() {
        let pool = vec![ws("alice-coordinator"), ws("coordinator")];
        let got = suggest("coord", &pool);
        let pos = |alias: &str| got.iter().position(|w| w.alias == alias);
        let coordinator = pos("coordinator").unwrap();
        if let Some(alice) = pos("alice-coordinator") {
            assert!(coordinator < alice);
        }
    }

    #[test]
    fn test_suggest_is_case_insensitive() {
        let pool = vec![ws("Reviewer")];
        let got = suggest("REVEIWER", &pool);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].alias, "Reviewer");
    }

    #[test]
    fn test_suggest_caps_at_three() {
        let pool = vec![ws("agent-a"), ws("agent-b"), ws("agent-c"), ws("agent-d"), ws("agent-e")];
        let got = suggest("agent", &pool);
        assert_eq!(got.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_suggest_ties_keep_input_order() {
        let pool = vec![ws("bobx"), ws("boby"), ws("bobz")];
        let got = suggest("bob", &pool);
        let aliases: Vec<_> = got.iter().map(|w| w.alias.as_str()).collect();
        assert_eq!(aliases, vec!["bobx", "boby", "bobz"]);
    }

    #[test]
    fn test_suggest_threshold_boundary() {
        // "abcd" vs "wxyz": distance 4, limit 4 / 2 + 3 = 5
        assert_eq!(suggest("abcd", &[ws("wxyz")]).len(), 1);
        // "ab" vs "wxyzuv": distance 6, limit 6 / 2 + 3 = 6
        assert_eq!(suggest("ab", &[ws("wxyzuv")]).len(), 1);
        // "a" vs "wxyzuvt": distance 7, limit 7 / 2 + 3 = 6
        assert!(suggest("a", &[ws("wxyzuvt")]).is_empty());
    }

    #[test]
    fn test_suggest_skips_workspaces_without_alias() {
        let pool = vec![Workspace::new("ws-1", "", ""), ws("bobby")];
        let got = suggest("bob", &pool);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].alias, "bobby");
    }

    #[test]
    fn test_suggest_empty_pool() {
        assert!(suggest("anything", &[]).is_empty());
    }
}
