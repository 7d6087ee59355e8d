use axum::{
    Router,
    http::Method,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use devtrack_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::repository::ActivityLogRepository;
use crate::handlers::{
    activity_log::{delete_activity_log, get_activity_logs},
    arrival::{
        create_arrival, delete_arrival, export_arrivals, get_arrival, get_arrivals,
        import_arrivals, update_arrival,
    },
    auth_event::receive_auth_event,
    dashboard::get_dashboard,
    delivery::{
        create_delivery, delete_delivery, export_deliveries, get_deliveries, get_delivery,
        import_deliveries, update_delivery,
    },
    health::{healthz, readyz},
    security_status::{
        create_security_status, delete_security_status, export_security_statuses,
        get_security_status, get_security_statuses, import_security_statuses,
        update_security_status,
    },
};
use crate::middleware::record_activity;
use crate::state::AppState;
use crate::usecase::activity::ActivityRecorder;

/// Named routes as `(method, path template, name)`.
///
/// Names feed object-id extraction in the audit pipeline.
const ROUTE_NAMES: &[(&str, &str, &str)] = &[
    // Device arrivals
    ("GET", "/device-arrival/", "device_arrival_list"),
    ("POST", "/device-arrival/", "device_arrival_create"),
    ("GET", "/device-arrival/export/", "device_arrival_export"),
    ("POST", "/device-arrival/import/", "device_arrival_import"),
    ("GET", "/device-arrival/{pk}/", "device_arrival_detail"),
    ("PUT", "/device-arrival/{pk}/", "device_arrival_update"),
    ("DELETE", "/device-arrival/{pk}/", "device_arrival_delete"),
    // Device deliveries
    ("GET", "/device-delivery/", "device_delivery_list"),
    ("POST", "/device-delivery/", "device_delivery_create"),
    ("GET", "/device-delivery/export/", "device_delivery_export"),
    ("POST", "/device-delivery/import/", "device_delivery_import"),
    ("GET", "/device-delivery/{pk}/", "device_delivery_detail"),
    ("PUT", "/device-delivery/{pk}/", "device_delivery_update"),
    ("DELETE", "/device-delivery/{pk}/", "device_delivery_delete"),
    // Device security statuses
    (
        "GET",
        "/device-security-status/",
        "device_security_status_list",
    ),
    (
        "POST",
        "/device-security-status/",
        "device_security_status_create",
    ),
    (
        "GET",
        "/device-security-status/export/",
        "device_security_status_export",
    ),
    (
        "POST",
        "/device-security-status/import/",
        "device_security_status_import",
    ),
    (
        "GET",
        "/device-security-status/{pk}/",
        "device_security_status_detail",
    ),
    (
        "PUT",
        "/device-security-status/{pk}/",
        "device_security_status_update",
    ),
    (
        "DELETE",
        "/device-security-status/{pk}/",
        "device_security_status_delete",
    ),
    // Dashboard
    ("GET", "/dashboard/", "dashboard"),
    // Activity logs
    ("GET", "/activity-logs/", "activity_log_list"),
    ("DELETE", "/activity-logs/{pk}/", "activity_log_delete"),
];

/// Name of the route registered for `method` at `template`.
pub fn route_name(method: &Method, template: &str) -> Option<&'static str> {
    ROUTE_NAMES
        .iter()
        .find(|(m, path, _)| *m == method.as_str() && *path == template)
        .map(|(_, _, name)| *name)
}

/// Wrap `router` so every routed request is audited through `recorder`.
pub fn with_activity_recording<R>(router: Router, recorder: ActivityRecorder<R>) -> Router
where
    R: ActivityLogRepository + Clone + 'static,
{
    router.layer(from_fn_with_state(recorder, record_activity::<R>))
}

pub fn build_router(state: AppState) -> Router {
    let recorder = state.activity_recorder();
    let routes = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Device arrivals
        .route("/device-arrival/", get(get_arrivals).post(create_arrival))
        .route("/device-arrival/export/", get(export_arrivals))
        .route("/device-arrival/import/", post(import_arrivals))
        .route(
            "/device-arrival/{pk}/",
            get(get_arrival).put(update_arrival).delete(delete_arrival),
        )
        // Device deliveries
        .route(
            "/device-delivery/",
            get(get_deliveries).post(create_delivery),
        )
        .route("/device-delivery/export/", get(export_deliveries))
        .route("/device-delivery/import/", post(import_deliveries))
        .route(
            "/device-delivery/{pk}/",
            get(get_delivery)
                .put(update_delivery)
                .delete(delete_delivery),
        )
        // Device security statuses
        .route(
            "/device-security-status/",
            get(get_security_statuses).post(create_security_status),
        )
        .route(
            "/device-security-status/export/",
            get(export_security_statuses),
        )
        .route(
            "/device-security-status/import/",
            post(import_security_statuses),
        )
        .route(
            "/device-security-status/{pk}/",
            get(get_security_status)
                .put(update_security_status)
                .delete(delete_security_status),
        )
        // Dashboard
        .route("/dashboard/", get(get_dashboard))
        // Activity logs
        .route("/activity-logs/", get(get_activity_logs))
        .route("/activity-logs/{pk}/", delete(delete_activity_log))
        // Auth lifecycle intake
        .route("/internal/auth-events", post(receive_auth_event))
        .with_state(state);

    with_activity_recording(routes, recorder)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
