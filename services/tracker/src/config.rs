use serde::Deserialize;

use devtrack_core::config::Config;

/// Tracker service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct TrackerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `TRACKER_PORT`.
    #[serde(default = "default_tracker_port")]
    pub tracker_port: u16,
    /// Reconciliation window in hours (default 24).
    #[serde(default = "default_dashboard_window_hours")]
    pub dashboard_window_hours: u32,
    #[serde(default = "default_dashboard_page_size")]
    pub dashboard_page_size: u32,
    /// Shared secret expected in `x-devtrack-internal-token`.
    pub auth_events_token: String,
    /// Capacity of the auth-event broadcast channel (default 64).
    #[serde(default = "default_auth_event_buffer")]
    pub auth_event_buffer: usize,
}

impl Config for TrackerConfig {}

fn default_tracker_port() -> u16 {
    3114
}

fn default_dashboard_window_hours() -> u32 {
    24
}

fn default_dashboard_page_size() -> u32 {
    20
}

fn default_auth_event_buffer() -> usize {
    64
}
