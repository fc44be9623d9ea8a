use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait,
};

use crate::model::batch::SaveBatchDto;

pub struct BatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BatchRepository<'a, C> {
    /// Creates a new instance of [`BatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new batch with the provided record id
    pub async fn create(
        &self,
        id: String,
        batch: SaveBatchDto,
    ) -> Result<entity::batch::Model, DbErr> {
        let batch = entity::batch::ActiveModel {
            id: ActiveValue::Set(id),
            batch_number: ActiveValue::Set(batch.batch_number),
            start_date: ActiveValue::Set(batch.start_date),
            end_date: ActiveValue::Set(batch.end_date),
            qr_code: ActiveValue::Set(batch.qr_code),
            batch_type: ActiveValue::Set(batch.batch_type),
            attendance_types: ActiveValue::Set(
                serde_json::to_string(&batch.attendance_types).unwrap_or_else(|_| "[]".to_string()),
            ),
            monthly_data: ActiveValue::Set(
                batch
                    .monthly_data
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "{}".to_string()),
            ),
        };

        batch.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find().all(self.db).await
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Batch::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Updates a batch by record id, returning the number of rows affected
    pub async fn update(&self, id: &str, batch: SaveBatchDto) -> Result<u64, DbErr> {
        let batch = entity::batch::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            batch_number: ActiveValue::Set(batch.batch_number),
            start_date: ActiveValue::Set(batch.start_date),
            end_date: ActiveValue::Set(batch.end_date),
            qr_code: ActiveValue::Set(batch.qr_code),
            batch_type: ActiveValue::Set(batch.batch_type),
            attendance_types: ActiveValue::Set(
                serde_json::to_string(&batch.attendance_types).unwrap_or_else(|_| "[]".to_string()),
            ),
            monthly_data: ActiveValue::Set(
                batch
                    .monthly_data
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "{}".to_string()),
            ),
        };

        match batch.update(self.db).await {
            Ok(_) => Ok(1),
            Err(DbErr::RecordNotUpdated) => Ok(0),
            Err(err) => Err(err),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Batch::delete_by_id(id).exec(self.db).await
    }
}
