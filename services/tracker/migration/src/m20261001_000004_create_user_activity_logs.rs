use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserActivityLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserActivityLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserActivityLogs::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserActivityLogs::ActionType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserActivityLogs::ContentType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserActivityLogs::ObjectId).big_integer())
                    .col(
                        ColumnDef::new(UserActivityLogs::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserActivityLogs::IpAddress)
                            .string_len(45)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserActivityLogs::UserAgent)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserActivityLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(UserActivityLogs::Table)
                    .col(UserActivityLogs::UserId)
                    .col(UserActivityLogs::Timestamp)
                    .name("idx_user_activity_logs_user_id_timestamp")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(UserActivityLogs::Table)
                    .col(UserActivityLogs::Timestamp)
                    .name("idx_user_activity_logs_timestamp")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivityLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserActivityLogs {
    Table,
    Id,
    UserId,
    ActionType,
    ContentType,
    ObjectId,
    Description,
    IpAddress,
    UserAgent,
    Timestamp,
}
