//! Support tickets.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chamado")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_number: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: i32,
    pub requester_id: Uuid,
    pub technician_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub closure_description: Option<String>,
    pub created_time: DateTimeUtc,
    pub last_modified_time: DateTimeUtc,
    pub closed_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
