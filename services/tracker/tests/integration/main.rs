mod helpers;

mod activity_log_test;
mod audit_test;
mod auth_event_test;
mod dashboard_test;
mod router_test;
