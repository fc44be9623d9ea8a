use serde::Deserialize;

/// Raw bulk-upload rows as parsed client-side from CSV or spreadsheet
/// files. Every field is optional and loosely typed; the import pipeline's
/// validator turns a row into a normalized, fully-typed record or rejects
/// the whole upload with the row number and offending field.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawStudentRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub batch_id: Option<String>,
    /// Accepts a boolean, a 0/1 number, or a "true"/"false"/"0"/"1" string.
    #[serde(default)]
    pub active: Option<serde_json::Value>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub profile_complete: Option<serde_json::Value>,
    #[serde(default)]
    pub education: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawMarkRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    /// Batch the uploaded file claims the student belongs to. Must match
    /// the student's actual batch or the whole upload aborts.
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub exam: Option<String>,
    /// Accepts a number or a numeric string.
    #[serde(default)]
    pub score: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    pub mark_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawAttendanceRow {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub attendance_type: Option<String>,
    #[serde(default)]
    pub present: Option<serde_json::Value>,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
}

/// Envelope for the attendance bulk upload. All three fields are required;
/// a missing one rejects the request before any row is examined.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBulkRequest {
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub attendance_data: Option<Vec<RawAttendanceRow>>,
}
