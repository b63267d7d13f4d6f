//! Client tests against a mock coordination service.

use muster_client::{
    CreateEscalationRequest, Error, MusterClient, Priority, SendNotificationRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MusterClient {
    MusterClient::builder()
        .base_url(server.uri())
        .auth_token("test-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_workspaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/demo/workspaces"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [
                {"workspace_id": "ws-1", "alias": "coordinator", "human_name": "Coordinator"},
                {"workspace_id": "ws-2", "alias": "bob-agent", "human_name": "Bob"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspaces = client_for(&server).await.workspaces().list("demo").await.unwrap();
    assert_eq!(workspaces.len(), 2);
    assert_eq!(workspaces[0].alias, "coordinator");
    assert_eq!(workspaces[1].workspace_id, "ws-2");
}

#[tokio::test]
async fn test_list_workspaces_resolves_alias() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/demo/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspaces": [
                {"workspace_id": "ws-1", "alias": "coordinator", "human_name": "Coordinator"},
                {"workspace_id": "ws-2", "alias": "coordinator-2", "human_name": "Backup"}
            ]
        })))
        .mount(&server)
        .await;

    let workspaces = client_for(&server).await.workspaces().list("demo").await.unwrap();
    let resolved = muster_alias::resolve("COORDINATOR", &workspaces).unwrap();
    assert_eq!(resolved.workspace_id, "ws-1");
}

#[tokio::test]
async fn test_pending_chat() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/demo/workspaces/ws-1/chat/pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "messages": [{
                "id": "m1",
                "from_alias": "bob-agent",
                "from_workspace_id": "ws-2",
                "body": "can you review my branch?",
                "sent_at": "2026-03-01T12:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let pending = client_for(&server)
        .await
        .chat()
        .pending("demo", "ws-1")
        .await
        .unwrap();
    assert_eq!(pending.count, 1);
    assert_eq!(pending.messages[0].body, "can you review my branch?");
}

#[tokio::test]
async fn test_create_escalation_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/projects/demo/escalations"))
        .and(body_json(json!({
            "workspace_id": "ws-1",
            "from_workspace_id": "ws-2",
            "summary": "deploy blocked",
            "priority": "urgent"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "esc-9",
            "status": "open",
            "created_at": "2026-03-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateEscalationRequest {
        workspace_id: "ws-1".to_string(),
        from_workspace_id: Some("ws-2".to_string()),
        summary: "deploy blocked".to_string(),
        details: None,
        priority: Priority::Urgent,
    };
    let escalation = client_for(&server)
        .await
        .escalations()
        .create("demo", &request)
        .await
        .unwrap();
    assert_eq!(escalation.id, "esc-9");
    assert_eq!(escalation.status, "open");
}

#[tokio::test]
async fn test_send_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/projects/demo/notifications"))
        .and(body_json(json!({"workspace_id": "ws-1", "message": "ping"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "n-1", "delivered": true})),
        )
        .mount(&server)
        .await;

    let request = SendNotificationRequest {
        workspace_id: "ws-1".to_string(),
        message: "ping".to_string(),
        from_workspace_id: None,
    };
    let notification = client_for(&server)
        .await
        .notifications()
        .send("demo", &request)
        .await
        .unwrap();
    assert!(notification.delivered);
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/demo/workspaces"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "unauthorized",
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .workspaces()
        .list("demo")
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert!(matches!(err, Error::Auth(ref msg) if msg == "token expired"));
}

#[tokio::test]
async fn test_unknown_project_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/nope/workspaces"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "not_found",
            "message": "project not found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .workspaces()
        .list("nope")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects/demo/workspaces"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .workspaces()
        .list("demo")
        .await
        .unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 502);
            assert_eq!(code, "unknown");
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "version": "1.4.0"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let health = client.health().check().await.unwrap();
    assert_eq!(health.version, "1.4.0");
    assert!(client.health().is_healthy().await);
}
