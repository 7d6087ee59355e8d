use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceSecurityStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::NetworkElementName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::IsOnline)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::AssetSerialNumber)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeviceSecurityStatuses::CheckDate).date())
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::LastCheckTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeviceSecurityStatuses::CreatedBy).uuid())
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceSecurityStatuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(DeviceSecurityStatuses::Table)
                    .col(DeviceSecurityStatuses::CreatedAt)
                    .name("idx_device_security_statuses_created_at")
                    .to_owned(),
            )
            .await?;

        // Same-day online/offline summary filters on check_date.
        manager
            .create_index(
                Index::create()
                    .table(DeviceSecurityStatuses::Table)
                    .col(DeviceSecurityStatuses::CheckDate)
                    .col(DeviceSecurityStatuses::IsOnline)
                    .name("idx_device_security_statuses_check_date_is_online")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DeviceSecurityStatuses::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DeviceSecurityStatuses {
    Table,
    Id,
    NetworkElementName,
    IsOnline,
    AssetSerialNumber,
    CheckDate,
    LastCheckTime,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
