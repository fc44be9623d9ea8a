use serde::{Deserialize, Serialize};

/// Login request shared by the admin and student flows. `identifier` is
/// the admin email or the student email; `credential` is the admin
/// password or the student mobile number.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub identifier: String,
    pub credential: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    pub id: String,
    pub role: String,
    pub name: String,
    pub profile_complete: bool,
}
