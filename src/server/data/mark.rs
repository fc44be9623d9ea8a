use chrono::NaiveDate;
use entity::mark::MarkType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::mark::SaveMarkDto;

pub struct MarkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarkRepository<'a, C> {
    /// Creates a new instance of [`MarkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one mark row
    pub async fn create(
        &self,
        id: String,
        student_id: String,
        exam: String,
        score: f64,
        mark_type: MarkType,
        date: NaiveDate,
    ) -> Result<entity::mark::Model, DbErr> {
        let mark = entity::mark::ActiveModel {
            id: ActiveValue::Set(id),
            student_id: ActiveValue::Set(student_id),
            exam: ActiveValue::Set(exam),
            score: ActiveValue::Set(score),
            mark_type: ActiveValue::Set(mark_type),
            date: ActiveValue::Set(date),
        };

        mark.insert(self.db).await
    }

    /// Point lookup by the natural key `(student_id, exam, date, mark_type)`
    ///
    /// Used by the duplicate check of the bulk-import pipeline and by the
    /// single-entry path's conflict detection.
    pub async fn exists_by_natural_key(
        &self,
        student_id: &str,
        exam: &str,
        date: NaiveDate,
        mark_type: MarkType,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Mark::find()
            .filter(entity::mark::Column::StudentId.eq(student_id))
            .filter(entity::mark::Column::Exam.eq(exam))
            .filter(entity::mark::Column::Date.eq(date))
            .filter(entity::mark::Column::MarkType.eq(mark_type))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::mark::Model>, DbErr> {
        entity::prelude::Mark::find().all(self.db).await
    }

    /// Updates a mark by record id, returning the number of rows affected
    ///
    /// The single-entry edit path allows explicit overwrite by primary key,
    /// including onto an existing natural key.
    pub async fn update(&self, id: &str, mark: SaveMarkDto) -> Result<u64, DbErr> {
        let mark = entity::mark::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            student_id: ActiveValue::Set(mark.student_id),
            exam: ActiveValue::Set(mark.exam),
            score: ActiveValue::Set(mark.score),
            mark_type: ActiveValue::Set(mark.mark_type),
            date: ActiveValue::Set(mark.date),
        };

        match mark.update(self.db).await {
            Ok(_) => Ok(1),
            Err(DbErr::RecordNotUpdated) => Ok(0),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Mark::delete_by_id(id).exec(self.db).await
    }
}
