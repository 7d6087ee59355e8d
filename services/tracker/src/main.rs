use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Duration;
use sea_orm::Database;
use tracing::info;

use devtrack_core::config::Config;
use devtrack_core::tracing::init_tracing;

use devtrack_tracker::config::TrackerConfig;
use devtrack_tracker::domain::audit::ClassificationRules;
use devtrack_tracker::infra::event_bus::AuthEventBus;
use devtrack_tracker::router::build_router;
use devtrack_tracker::state::AppState;
use devtrack_tracker::usecase::activity::spawn_auth_event_listener;

#[tokio::main]
async fn main() {
    init_tracing("info,devtrack_tracker=debug,tower_http=info");

    let config = TrackerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        auth_events: AuthEventBus::new(config.auth_event_buffer),
        auth_events_token: config.auth_events_token,
        dashboard_window: Duration::hours(i64::from(config.dashboard_window_hours)),
        dashboard_page_size: config.dashboard_page_size,
        rules: Arc::new(ClassificationRules::default()),
    };

    // Login/logout entries come from the auth-event bus, not the request path.
    spawn_auth_event_listener(state.activity_recorder(), state.auth_events.subscribe());

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.tracker_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("tracker service listening on {addr}");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
