use sea_orm::entity::prelude::*;

/// A stored resume review record. The scoring itself happens outside the
/// backend; only the resulting match score and texts are persisted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resume_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: String,
    pub batch_id: String,
    pub date: String,
    pub match_score: f64,
    #[sea_orm(column_type = "Text")]
    pub resume_text: String,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
