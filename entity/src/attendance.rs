use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One presence event for one student on one date and session type.
///
/// The natural key is `(student_id, date, attendance_type)`; bulk imports
/// skip rows whose key already exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: String,
    pub date: Date,
    pub attendance_type: AttendanceType,
    pub present: bool,
    #[sea_orm(nullable)]
    pub in_time: Option<String>,
    #[sea_orm(nullable)]
    pub out_time: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    #[sea_orm(string_value = "class")]
    Class,
    #[sea_orm(string_value = "lab")]
    Lab,
    #[sea_orm(string_value = "hr_session")]
    HrSession,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
