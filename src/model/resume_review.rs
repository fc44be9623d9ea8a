use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReviewDto {
    pub id: i32,
    pub student_id: String,
    pub batch_id: String,
    pub date: String,
    pub match_score: f64,
    pub resume_text: String,
    pub job_description: String,
}

impl From<entity::resume_review::Model> for ResumeReviewDto {
    fn from(model: entity::resume_review::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            batch_id: model.batch_id,
            date: model.date,
            match_score: model.match_score,
            resume_text: model.resume_text,
            job_description: model.job_description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeReviewDto {
    pub student_id: String,
    pub batch_id: String,
    pub date: String,
    pub match_score: f64,
    pub resume_text: String,
    pub job_description: String,
}
