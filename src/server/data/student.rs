use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::model::student::SaveStudentDto;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student with the provided record id
    pub async fn create(
        &self,
        id: String,
        student: SaveStudentDto,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(id),
            student_id: ActiveValue::Set(student.student_id),
            name: ActiveValue::Set(student.name),
            email: ActiveValue::Set(student.email),
            mobile: ActiveValue::Set(student.mobile),
            batch_id: ActiveValue::Set(student.batch_id),
            active: ActiveValue::Set(student.active),
            photo: ActiveValue::Set(student.photo),
            password: ActiveValue::Set(student.password),
            profile_complete: ActiveValue::Set(student.profile_complete),
            education: ActiveValue::Set(student.education.map(|value| value.to_string())),
        };

        student.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Looks up a student by login credentials (email + mobile number)
    pub async fn get_by_email_and_mobile(
        &self,
        email: &str,
        mobile: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .filter(entity::student::Column::Mobile.eq(mobile))
            .one(self.db)
            .await
    }

    /// Updates a student by record id
    ///
    /// Returns the number of rows affected; zero means no student with the
    /// provided id exists.
    pub async fn update(&self, id: &str, student: SaveStudentDto) -> Result<u64, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            student_id: ActiveValue::Set(student.student_id),
            name: ActiveValue::Set(student.name),
            email: ActiveValue::Set(student.email),
            mobile: ActiveValue::Set(student.mobile),
            batch_id: ActiveValue::Set(student.batch_id),
            active: ActiveValue::Set(student.active),
            photo: ActiveValue::Set(student.photo),
            password: ActiveValue::Set(student.password),
            profile_complete: ActiveValue::Set(student.profile_complete),
            education: ActiveValue::Set(student.education.map(|value| value.to_string())),
        };

        match student.update(self.db).await {
            Ok(_) => Ok(1),
            Err(DbErr::RecordNotUpdated) => Ok(0),
            Err(err) => Err(err),
        }
    }

    /// Deletes a student
    ///
    /// Deletion is immediate; marks and attendance referencing the student
    /// are left in place. Returns OK regardless of the student existing,
    /// check [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(id).exec(self.db).await
    }
}
