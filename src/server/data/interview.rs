use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::interview::SaveInterviewDto;

pub struct InterviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InterviewRepository<'a, C> {
    /// Creates a new instance of [`InterviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one interview session, storing the structured payloads as
    /// JSON text
    pub async fn create(
        &self,
        interview: SaveInterviewDto,
    ) -> Result<entity::interview::Model, DbErr> {
        let interview = entity::interview::ActiveModel {
            student_id: ActiveValue::Set(interview.student_id),
            interview_mode: ActiveValue::Set(interview.interview_mode),
            focus_area: ActiveValue::Set(interview.focus_area),
            questions: ActiveValue::Set(interview.questions.to_string()),
            answers: ActiveValue::Set(interview.answers.to_string()),
            scores: ActiveValue::Set(interview.scores.to_string()),
            feedback: ActiveValue::Set(interview.feedback.to_string()),
            date: ActiveValue::Set(interview.date),
            ..Default::default()
        };

        interview.insert(self.db).await
    }

    pub async fn get_by_student_id(
        &self,
        student_id: &str,
    ) -> Result<Vec<entity::interview::Model>, DbErr> {
        entity::prelude::Interview::find()
            .filter(entity::interview::Column::StudentId.eq(student_id))
            .all(self.db)
            .await
    }
}
