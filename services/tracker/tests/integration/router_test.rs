use axum::http::StatusCode;
use axum_test::TestServer;
use uuid::Uuid;

use devtrack_testing::auth::MockAuth;
use devtrack_tracker::router::build_router;

use crate::helpers::offline_state;

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let server = TestServer::new(build_router(offline_state())).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    let request_id = response.header("x-request-id");
    assert!(request_id.to_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let server = TestServer::new(build_router(offline_state())).unwrap();

    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_device_routes_without_identity() {
    let server = TestServer::new(build_router(offline_state())).unwrap();

    let response = server.get("/device-arrival/").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_activity_log_listing_for_staff() {
    let server = TestServer::new(build_router(offline_state())).unwrap();
    let [(id_name, id_value), (role_name, role_value)] = MockAuth::staff().header_pairs();

    let response = server
        .get("/activity-logs/")
        .add_header(id_name, id_value)
        .add_header(role_name, role_value)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_reject_unknown_activity_filter_value() {
    let server = TestServer::new(build_router(offline_state())).unwrap();
    let [(id_name, id_value), (role_name, role_value)] = MockAuth::superuser().header_pairs();

    server
        .get("/activity-logs/")
        .add_query_param("action-type", "explode")
        .add_header(id_name, id_value)
        .add_header(role_name, role_value)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
