use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::resume_review::SaveResumeReviewDto;

pub struct ResumeReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResumeReviewRepository<'a, C> {
    /// Creates a new instance of [`ResumeReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        review: SaveResumeReviewDto,
    ) -> Result<entity::resume_review::Model, DbErr> {
        let review = entity::resume_review::ActiveModel {
            student_id: ActiveValue::Set(review.student_id),
            batch_id: ActiveValue::Set(review.batch_id),
            date: ActiveValue::Set(review.date),
            match_score: ActiveValue::Set(review.match_score),
            resume_text: ActiveValue::Set(review.resume_text),
            job_description: ActiveValue::Set(review.job_description),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::resume_review::Model>, DbErr> {
        entity::prelude::ResumeReview::find().all(self.db).await
    }
}
