pub mod db;
pub mod event_bus;
