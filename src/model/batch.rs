use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A batch as served to clients. The JSON text columns are parsed back
/// into structured values, falling back to empty defaults when the stored
/// text is not valid JSON.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDto {
    pub id: String,
    pub batch_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub qr_code: Option<String>,
    pub batch_type: String,
    pub attendance_types: Vec<String>,
    pub monthly_data: serde_json::Value,
}

impl From<entity::batch::Model> for BatchDto {
    fn from(model: entity::batch::Model) -> Self {
        let attendance_types = serde_json::from_str(&model.attendance_types).unwrap_or_default();
        let monthly_data = serde_json::from_str(&model.monthly_data)
            .unwrap_or_else(|_| serde_json::Value::Object(Default::default()));

        Self {
            id: model.id,
            batch_number: model.batch_number,
            start_date: model.start_date,
            end_date: model.end_date,
            qr_code: model.qr_code,
            batch_type: model.batch_type,
            attendance_types,
            monthly_data,
        }
    }
}

/// Request body for creating or updating a batch. The id is always
/// server-generated on create.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBatchDto {
    pub batch_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub qr_code: Option<String>,
    pub batch_type: String,
    #[serde(default)]
    pub attendance_types: Vec<String>,
    #[serde(default)]
    pub monthly_data: Option<serde_json::Value>,
}
