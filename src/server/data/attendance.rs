use chrono::NaiveDate;
use entity::attendance::AttendanceType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    /// Creates a new instance of [`AttendanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one attendance row
    pub async fn create(
        &self,
        student_id: String,
        date: NaiveDate,
        attendance_type: AttendanceType,
        present: bool,
        in_time: Option<String>,
        out_time: Option<String>,
    ) -> Result<entity::attendance::Model, DbErr> {
        let record = entity::attendance::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            date: ActiveValue::Set(date),
            attendance_type: ActiveValue::Set(attendance_type),
            present: ActiveValue::Set(present),
            in_time: ActiveValue::Set(in_time),
            out_time: ActiveValue::Set(out_time),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Point lookup by the natural key `(student_id, date, attendance_type)`
    pub async fn exists_by_natural_key(
        &self,
        student_id: &str,
        date: NaiveDate,
        attendance_type: AttendanceType,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .filter(entity::attendance::Column::AttendanceType.eq(attendance_type))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find().all(self.db).await
    }
}
