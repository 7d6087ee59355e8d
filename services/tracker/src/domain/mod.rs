pub mod audit;
pub mod reconcile;
pub mod repository;
pub mod types;
