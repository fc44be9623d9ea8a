use serde::{Deserialize, Serialize};

/// A recorded interview session. Question/answer/score/feedback payloads
/// round-trip as structured JSON; the database stores them as text.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDto {
    pub id: i32,
    pub student_id: String,
    pub interview_mode: String,
    pub focus_area: String,
    pub questions: serde_json::Value,
    pub answers: serde_json::Value,
    pub scores: serde_json::Value,
    pub feedback: serde_json::Value,
    pub date: String,
}

impl From<entity::interview::Model> for InterviewDto {
    fn from(model: entity::interview::Model) -> Self {
        let parse = |text: &str| serde_json::from_str(text).unwrap_or(serde_json::Value::Null);

        Self {
            id: model.id,
            student_id: model.student_id,
            interview_mode: model.interview_mode,
            focus_area: model.focus_area,
            questions: parse(&model.questions),
            answers: parse(&model.answers),
            scores: parse(&model.scores),
            feedback: parse(&model.feedback),
            date: model.date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveInterviewDto {
    pub student_id: String,
    pub interview_mode: String,
    pub focus_area: String,
    pub questions: serde_json::Value,
    pub answers: serde_json::Value,
    pub scores: serde_json::Value,
    pub feedback: serde_json::Value,
    pub date: String,
}
