use serde::{Deserialize, Serialize};

/// A student as served to clients. `education` is returned as the parsed
/// JSON value rather than the raw text stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub batch_id: String,
    pub active: bool,
    pub photo: String,
    pub password: String,
    pub profile_complete: bool,
    pub education: Option<serde_json::Value>,
}

impl From<entity::student::Model> for StudentDto {
    fn from(model: entity::student::Model) -> Self {
        let education = model
            .education
            .as_deref()
            .and_then(|text| serde_json::from_str(text).ok());

        Self {
            id: model.id,
            student_id: model.student_id,
            name: model.name,
            email: model.email,
            mobile: model.mobile,
            batch_id: model.batch_id,
            active: model.active,
            photo: model.photo,
            password: model.password,
            profile_complete: model.profile_complete,
            education,
        }
    }
}

/// Request body for creating or updating a single student. On create a
/// missing `id` is filled with a generated UUID; on update the path
/// parameter wins over any `id` in the body.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveStudentDto {
    #[serde(default)]
    pub id: Option<String>,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub batch_id: String,
    pub active: bool,
    #[serde(default)]
    pub photo: String,
    pub password: String,
    pub profile_complete: bool,
    #[serde(default)]
    pub education: Option<serde_json::Value>,
}
