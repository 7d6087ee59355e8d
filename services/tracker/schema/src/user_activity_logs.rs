use sea_orm::entity::prelude::*;

/// Append-only audit entry. `action_type` and `content_type` hold the
/// snake_case wire values of `devtrack_domain::activity`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_activity_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Uuid,
    pub action_type: String,
    pub content_type: String,
    pub object_id: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub ip_address: String,
    #[sea_orm(column_type = "Text")]
    pub user_agent: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
