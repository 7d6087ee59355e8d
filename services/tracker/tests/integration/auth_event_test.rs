use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use uuid::Uuid;

use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_tracker::domain::types::{AuthEvent, AuthEventKind, ClientInfo};
use devtrack_tracker::handlers::auth_event::X_DEVTRACK_INTERNAL_TOKEN;
use devtrack_tracker::infra::event_bus::AuthEventBus;
use devtrack_tracker::router::build_router;
use devtrack_tracker::usecase::activity::spawn_auth_event_listener;

use crate::helpers::{MockActivityLogRepo, TEST_AUTH_EVENTS_TOKEN, offline_state};

fn event(kind: AuthEventKind) -> AuthEvent {
    AuthEvent {
        kind,
        user_id: Uuid::now_v7(),
        client: ClientInfo {
            ip_address: "10.0.0.7".to_owned(),
            user_agent: "gateway".to_owned(),
        },
    }
}

// ── Listener ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_append_one_entry_per_login_and_logout() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let bus = AuthEventBus::new(8);
    let listener = spawn_auth_event_listener(repo.recorder(), bus.subscribe());

    let login = event(AuthEventKind::Login);
    bus.publish(login.clone());
    bus.publish(event(AuthEventKind::Logout));
    drop(bus);
    listener.await.unwrap();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action_type, ActionType::Login);
    assert_eq!(entries[0].content_type, ContentType::User);
    assert_eq!(entries[0].description, "user login");
    assert_eq!(entries[0].user_id, login.user_id);
    assert_eq!(entries[0].ip_address, "10.0.0.7");
    assert_eq!(entries[0].user_agent, "gateway");
    assert_eq!(entries[0].object_id, None);
    assert_eq!(entries[1].action_type, ActionType::Logout);
    assert_eq!(entries[1].description, "user logout");
}

#[tokio::test]
async fn should_keep_listening_after_lagging() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let bus = AuthEventBus::new(1);
    let receiver = bus.subscribe();

    bus.publish(event(AuthEventKind::Login));
    bus.publish(event(AuthEventKind::Login));
    bus.publish(event(AuthEventKind::Logout));
    drop(bus);

    spawn_auth_event_listener(repo.recorder(), receiver)
        .await
        .unwrap();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action_type, ActionType::Logout);
}

#[tokio::test]
async fn should_survive_store_failures() {
    let repo = MockActivityLogRepo::failing();
    let bus = AuthEventBus::new(8);
    let listener = spawn_auth_event_listener(repo.recorder(), bus.subscribe());

    bus.publish(event(AuthEventKind::Login));
    drop(bus);

    assert!(listener.await.is_ok());
}

// ── Intake endpoint ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_publish_accepted_auth_event() {
    let state = offline_state();
    let mut receiver = state.auth_events.subscribe();
    let server = TestServer::new(build_router(state)).unwrap();
    let user_id = Uuid::now_v7();

    server
        .post("/internal/auth-events")
        .add_header(
            HeaderName::from_static(X_DEVTRACK_INTERNAL_TOKEN),
            HeaderValue::from_static(TEST_AUTH_EVENTS_TOKEN),
        )
        .json(&serde_json::json!({
            "kind": "login",
            "user_id": user_id,
            "ip_address": "192.0.2.1",
        }))
        .await
        .assert_status(StatusCode::ACCEPTED);

    let published = receiver.recv().await.unwrap();
    assert_eq!(published.kind, AuthEventKind::Login);
    assert_eq!(published.user_id, user_id);
    assert_eq!(published.client.ip_address, "192.0.2.1");
    assert_eq!(published.client.user_agent, "");
}

#[tokio::test]
async fn should_reject_auth_event_without_token() {
    let state = offline_state();
    let mut receiver = state.auth_events.subscribe();
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/internal/auth-events")
        .json(&serde_json::json!({
            "kind": "logout",
            "user_id": Uuid::now_v7(),
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
    assert!(receiver.try_recv().is_err());
}
