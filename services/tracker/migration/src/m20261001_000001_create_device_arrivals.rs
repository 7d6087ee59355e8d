use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceArrivals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceArrivals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeviceArrivals::ProjectName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceArrivals::ArrivalDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceArrivals::DeviceModel)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceArrivals::Barcode)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DeviceArrivals::CreatedBy).uuid())
                    .col(
                        ColumnDef::new(DeviceArrivals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceArrivals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard reconciliation scans a created_at window.
        manager
            .create_index(
                Index::create()
                    .table(DeviceArrivals::Table)
                    .col(DeviceArrivals::CreatedAt)
                    .name("idx_device_arrivals_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceArrivals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeviceArrivals {
    Table,
    Id,
    ProjectName,
    ArrivalDate,
    DeviceModel,
    Barcode,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
