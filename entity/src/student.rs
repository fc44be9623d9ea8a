use sea_orm::entity::prelude::*;

/// A registered student. `batch_id` is a weak reference to the batch the
/// student belongs to; batches do not own their students.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// External, institute-assigned identifier (e.g. "STU002").
    #[sea_orm(unique)]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub batch_id: String,
    pub active: bool,
    pub photo: String,
    pub password: String,
    pub profile_complete: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub education: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
