use chrono::NaiveDate;
use entity::attendance::AttendanceType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: i32,
    pub student_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub attendance_type: AttendanceType,
    pub present: bool,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
}

impl From<entity::attendance::Model> for AttendanceDto {
    fn from(model: entity::attendance::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            date: model.date,
            attendance_type: model.attendance_type,
            present: model.present,
            in_time: model.in_time,
            out_time: model.out_time,
        }
    }
}

/// Request body for recording a single attendance event (QR scan or
/// manual entry).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveAttendanceDto {
    pub student_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub attendance_type: AttendanceType,
    pub present: bool,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
}
