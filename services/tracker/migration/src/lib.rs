use sea_orm_migration::prelude::*;

mod m20261001_000001_create_device_arrivals;
mod m20261001_000002_create_device_deliveries;
mod m20261001_000003_create_device_security_statuses;
mod m20261001_000004_create_user_activity_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_device_arrivals::Migration),
            Box::new(m20261001_000002_create_device_deliveries::Migration),
            Box::new(m20261001_000003_create_device_security_statuses::Migration),
            Box::new(m20261001_000004_create_user_activity_logs::Migration),
        ]
    }
}
