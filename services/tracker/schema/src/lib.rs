//! sea-orm entities for the tracker service.

pub mod device_arrivals;
pub mod device_deliveries;
pub mod device_security_statuses;
pub mod user_activity_logs;
