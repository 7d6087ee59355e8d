use sea_orm::entity::prelude::*;

/// A device handed out to a recipient unit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device_deliveries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub delivery_date: chrono::NaiveDate,
    pub barcode: String,
    pub device_model: String,
    pub recipient_unit: String,
    pub recipient: String,
    pub created_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
