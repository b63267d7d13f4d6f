//! Request and response types for the Muster API.
//!
//! These types mirror the coordination service's API contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use muster_alias::Workspace;

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version.
    #[serde(default)]
    pub version: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workspaces
// ─────────────────────────────────────────────────────────────────────────────

/// Response for listing a project's workspaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWorkspacesResponse {
    /// Registered workspaces.
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// A chat message waiting to be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message ID.
    pub id: String,
    /// Alias of the sending workspace.
    #[serde(default)]
    pub from_alias: String,
    /// ID of the sending workspace.
    #[serde(default)]
    pub from_workspace_id: String,
    /// Message body.
    pub body: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

/// Pending chat for one workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingChatResponse {
    /// Number of unread messages. May exceed `messages.len()` when the server
    /// truncates the preview list.
    pub count: usize,
    /// Preview of the unread messages, oldest first.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl PendingChatResponse {
    /// Whether anything is waiting.
    pub fn has_pending(&self) -> bool {
        self.count > 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Escalations
// ─────────────────────────────────────────────────────────────────────────────

/// Escalation priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Normal => write!(f, "normal"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

/// Request to escalate to another workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEscalationRequest {
    /// Workspace receiving the escalation.
    pub workspace_id: String,
    /// Workspace raising the escalation, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_workspace_id: Option<String>,
    /// One-line summary.
    pub summary: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
}

/// A created escalation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Escalation {
    /// Escalation ID.
    pub id: String,
    /// Current status (e.g. "open").
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Request to notify a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendNotificationRequest {
    /// Workspace to notify.
    pub workspace_id: String,
    /// Notification text.
    pub message: String,
    /// Workspace sending the notification, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_workspace_id: Option<String>,
}

/// Result of sending a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID.
    pub id: String,
    /// Whether the target was online and received it immediately.
    #[serde(default)]
    pub delivered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalation_request_omits_empty_optionals() {
        let req = CreateEscalationRequest {
            workspace_id: "ws-1".to_string(),
            from_workspace_id: None,
            summary: "build is red".to_string(),
            details: None,
            priority: Priority::High,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "workspace_id": "ws-1",
                "summary": "build is red",
                "priority": "high"
            })
        );
    }

    #[test]
    fn test_pending_chat_parses() {
        let parsed: PendingChatResponse = serde_json::from_str(
            r#"{
                "count": 2,
                "messages": [
                    {"id": "m1", "from_alias": "bob", "body": "hi", "sent_at": "2026-01-02T03:04:05Z"}
                ]
            }"#,
        )
        .unwrap();
        assert!(parsed.has_pending());
        assert_eq!(parsed.messages.len(), 1);
        assert_eq!(parsed.messages[0].from_alias, "bob");
        assert!(parsed.messages[0].from_workspace_id.is_empty());
    }

    #[test]
    fn test_priority_default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
        assert_eq!(Priority::Urgent.to_string(), "urgent");
    }
}
