use sea_orm::entity::prelude::*;

/// A cohort of students sharing a date range, a type tag, and a monthly
/// plan of session counts stored as a JSON object in `monthly_data`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub batch_number: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub qr_code: Option<String>,
    pub batch_type: String,
    /// JSON array of attendance type tags enabled for this batch.
    #[sea_orm(column_type = "Text")]
    pub attendance_types: String,
    /// JSON object keyed by month ("YYYY-MM") holding planned session counts.
    #[sea_orm(column_type = "Text")]
    pub monthly_data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
