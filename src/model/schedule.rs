use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub batch_id: String,
    pub task: String,
    pub assigned_date: NaiveDate,
    pub submission_date: NaiveDate,
}

impl From<entity::schedule::Model> for ScheduleDto {
    fn from(model: entity::schedule::Model) -> Self {
        Self {
            id: model.id,
            batch_id: model.batch_id,
            task: model.task,
            assigned_date: model.assigned_date,
            submission_date: model.submission_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveScheduleDto {
    #[serde(default)]
    pub id: Option<String>,
    pub batch_id: String,
    pub task: String,
    pub assigned_date: NaiveDate,
    pub submission_date: NaiveDate,
}
