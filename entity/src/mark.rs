use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One exam or mock score event for one student.
///
/// The natural key is `(student_id, exam, date, mark_type)`: bulk imports
/// skip rows whose key already exists, the single-entry path rejects them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mark")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub exam: String,
    pub score: f64,
    pub mark_type: MarkType,
    pub date: Date,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum MarkType {
    #[sea_orm(string_value = "exam")]
    Exam,
    #[sea_orm(string_value = "mock")]
    Mock,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
