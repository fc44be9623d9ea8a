use chrono::NaiveDate;
use entity::mark::MarkType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkDto {
    pub id: String,
    pub student_id: String,
    pub exam: String,
    pub score: f64,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub mark_type: MarkType,
    pub date: NaiveDate,
}

impl From<entity::mark::Model> for MarkDto {
    fn from(model: entity::mark::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            exam: model.exam,
            score: model.score,
            mark_type: model.mark_type,
            date: model.date,
        }
    }
}

/// Request body for the single-entry mark path. Unlike the bulk rows this
/// is fully typed; the admin UI submits one validated entry at a time.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMarkDto {
    #[serde(default)]
    pub id: Option<String>,
    pub student_id: String,
    pub exam: String,
    pub score: f64,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub mark_type: MarkType,
    pub date: NaiveDate,
}
