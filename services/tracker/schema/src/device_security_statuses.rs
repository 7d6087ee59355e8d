use sea_orm::entity::prelude::*;

/// Installation/online check result for one network element.
///
/// `asset_serial_number` shares the identifier space of `device_arrivals.barcode`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device_security_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub network_element_name: String,
    pub is_online: bool,
    pub asset_serial_number: String,
    pub check_date: Option<chrono::NaiveDate>,
    pub last_check_time: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
