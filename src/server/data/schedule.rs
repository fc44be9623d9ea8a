use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
};

use crate::model::schedule::SaveScheduleDto;

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    /// Creates a new instance of [`ScheduleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        id: String,
        schedule: SaveScheduleDto,
    ) -> Result<entity::schedule::Model, DbErr> {
        let schedule = entity::schedule::ActiveModel {
            id: ActiveValue::Set(id),
            batch_id: ActiveValue::Set(schedule.batch_id),
            task: ActiveValue::Set(schedule.task),
            assigned_date: ActiveValue::Set(schedule.assigned_date),
            submission_date: ActiveValue::Set(schedule.submission_date),
        };

        schedule.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find().all(self.db).await
    }

    /// Updates a schedule by record id, returning the number of rows affected
    pub async fn update(&self, id: &str, schedule: SaveScheduleDto) -> Result<u64, DbErr> {
        let schedule = entity::schedule::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            batch_id: ActiveValue::Set(schedule.batch_id),
            task: ActiveValue::Set(schedule.task),
            assigned_date: ActiveValue::Set(schedule.assigned_date),
            submission_date: ActiveValue::Set(schedule.submission_date),
        };

        match schedule.update(self.db).await {
            Ok(_) => Ok(1),
            Err(DbErr::RecordNotUpdated) => Ok(0),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Schedule::delete_by_id(id).exec(self.db).await
    }
}
