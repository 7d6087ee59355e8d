use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceDeliveries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceDeliveries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::DeliveryDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::Barcode)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::DeviceModel)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::RecipientUnit)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::Recipient)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeviceDeliveries::CreatedBy).uuid())
                    .col(
                        ColumnDef::new(DeviceDeliveries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceDeliveries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceDeliveries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeviceDeliveries {
    Table,
    Id,
    DeliveryDate,
    Barcode,
    DeviceModel,
    RecipientUnit,
    Recipient,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
