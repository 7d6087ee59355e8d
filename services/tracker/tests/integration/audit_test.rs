use axum::{
    Router,
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    routing::{get, post},
};
use axum_test::TestServer;

use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_testing::auth::MockAuth;
use devtrack_tracker::router::with_activity_recording;

use crate::helpers::MockActivityLogRepo;

async fn ok() -> &'static str {
    "ok"
}

async fn created() -> StatusCode {
    StatusCode::CREATED
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Routes shaped like the real ones, with trivial handlers.
fn audited_server(repo: &MockActivityLogRepo) -> TestServer {
    let routes = Router::new()
        .route("/device-arrival/", get(ok).post(created))
        .route("/device-arrival/export/", get(ok))
        .route("/device-arrival/import/", post(ok))
        .route("/device-arrival/{pk}/", get(ok).put(ok).delete(no_content))
        .route("/device-delivery/{pk}/", get(ok).delete(no_content))
        .route("/dashboard/", get(ok))
        .route("/static/{*file}", get(ok))
        .route("/login/", post(ok))
        .route("/logout/", post(ok))
        .route("/somewhere/", get(ok));
    TestServer::new(with_activity_recording(routes, repo.recorder())).unwrap()
}

fn with_identity(request: axum_test::TestRequest, auth: &MockAuth) -> axum_test::TestRequest {
    let [(id_name, id_value), (role_name, role_value)] = auth.header_pairs();
    request
        .add_header(id_name, id_value)
        .add_header(role_name, role_value)
}

#[tokio::test]
async fn should_record_detail_view_with_object_id() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);
    let auth = MockAuth::staff();

    let response = with_identity(server.get("/device-arrival/42/"), &auth)
        .add_header(USER_AGENT, HeaderValue::from_static("scanner/1.0"))
        .await;
    response.assert_status_ok();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.user_id, auth.user_id);
    assert_eq!(entry.action_type, ActionType::View);
    assert_eq!(entry.content_type, ContentType::DeviceArrival);
    assert_eq!(entry.object_id, Some(42));
    assert_eq!(entry.description, "viewed device arrival record ID:42");
    assert_eq!(entry.user_agent, "scanner/1.0");
}

#[tokio::test]
async fn should_record_update_and_delete_with_object_id() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);
    let auth = MockAuth::staff();

    with_identity(server.put("/device-arrival/5/"), &auth).await;
    with_identity(server.delete("/device-delivery/7/"), &auth)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action_type, ActionType::Update);
    assert_eq!(entries[0].object_id, Some(5));
    assert_eq!(entries[1].action_type, ActionType::Delete);
    assert_eq!(entries[1].content_type, ContentType::DeviceDelivery);
    assert_eq!(
        entries[1].description,
        "deleted device delivery record ID:7"
    );
}

#[tokio::test]
async fn should_record_list_create_export_import_without_object_id() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);
    let auth = MockAuth::staff();

    with_identity(server.get("/device-arrival/"), &auth).await;
    with_identity(server.post("/device-arrival/"), &auth).await;
    with_identity(server.get("/device-arrival/export/"), &auth).await;
    with_identity(server.post("/device-arrival/import/"), &auth).await;

    let entries = entries.lock().unwrap();
    let actions: Vec<ActionType> = entries.iter().map(|e| e.action_type).collect();
    assert_eq!(
        actions,
        [
            ActionType::View,
            ActionType::Create,
            ActionType::Export,
            ActionType::Import
        ]
    );
    assert!(entries.iter().all(|e| e.object_id.is_none()));
    assert_eq!(entries[2].description, "exported device arrival record");
}

#[tokio::test]
async fn should_fall_back_to_system_content_type() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);

    with_identity(server.get("/somewhere/"), &MockAuth::staff()).await;
    with_identity(server.get("/dashboard/"), &MockAuth::staff()).await;

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(
        entries
            .iter()
            .all(|e| e.content_type == ContentType::System)
    );
    assert_eq!(entries[0].description, "viewed system");
}

#[tokio::test]
async fn should_not_record_ignored_paths() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);

    with_identity(server.get("/static/css/app.css"), &MockAuth::staff())
        .await
        .assert_status_ok();

    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_record_unauthenticated_requests() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);

    server.get("/device-arrival/1/").await.assert_status_ok();

    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_record_requests_with_malformed_identity() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);

    server
        .get("/device-arrival/1/")
        .add_header(
            HeaderName::from_static("x-devtrack-user-id"),
            HeaderValue::from_static("not-a-uuid"),
        )
        .add_header(
            HeaderName::from_static("x-devtrack-user-role"),
            HeaderValue::from_static("0"),
        )
        .await
        .assert_status_ok();

    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_response_when_audit_store_fails() {
    let repo = MockActivityLogRepo::failing();
    let server = audited_server(&repo);

    let response = with_identity(server.get("/device-arrival/3/"), &MockAuth::staff()).await;

    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn should_keep_response_when_audit_store_panics() {
    let repo = MockActivityLogRepo::panicking();
    let server = audited_server(&repo);

    let response = with_identity(server.delete("/device-arrival/3/"), &MockAuth::staff()).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(repo.entries_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_leave_login_and_logout_to_auth_events() {
    let repo = MockActivityLogRepo::new();
    let entries = repo.entries_handle();
    let server = audited_server(&repo);
    let auth = MockAuth::staff();

    with_identity(server.post("/login/"), &auth)
        .await
        .assert_status_ok();
    with_identity(server.post("/logout/"), &auth)
        .await
        .assert_status_ok();

    assert!(entries.lock().unwrap().is_empty());
}
