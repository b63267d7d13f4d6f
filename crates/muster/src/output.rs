//! Plain-text rendering shared by command handlers.
//!
//! Everything here is a pure function so hook output can be asserted exactly.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// Widest line allowed inside a box, excluding the borders.
pub const MAX_BOX_WIDTH: usize = 72;

/// Render `title` and `lines` inside an ASCII box.
///
/// ```text
/// +----------------------+
/// | 2 unread messages    |
/// +----------------------+
/// | bob-agent: hi there  |
/// +----------------------+
/// ```
///
/// Lines longer than [`MAX_BOX_WIDTH`] are truncated. An empty `lines` slice
/// renders just the title.
pub fn render_box(title: &str, lines: &[String]) -> String {
    let title = truncate(title, MAX_BOX_WIDTH);
    let lines: Vec<String> = lines.iter().map(|l| truncate(l, MAX_BOX_WIDTH)).collect();

    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);

    let rule = format!("+{}+", "-".repeat(width + 2));
    let row = |text: &str| {
        let pad = width - text.chars().count();
        format!("| {}{} |", text, " ".repeat(pad))
    };

    let mut out = vec![rule.clone(), row(&title), rule.clone()];
    if !lines.is_empty() {
        out.extend(lines.iter().map(|l| row(l)));
        out.push(rule);
    }
    out.join("\n")
}

/// Wrap text as hook output for the calling agent.
pub fn hook_output(event: &str, context: &str) -> Value {
    json!({
        "hookSpecificOutput": {
            "hookEventName": event,
            "additionalContext": context,
        }
    })
}

/// Collapse newlines and cut `s` to at most `max_len` characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace(['\r', '\n'], " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Short relative age, e.g. `5m ago`.
pub fn age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    match secs {
        0..60 => "just now".to_string(),
        60..3_600 => format!("{}m ago", secs / 60),
        3_600..86_400 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}
