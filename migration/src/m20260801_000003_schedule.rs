use sea_orm_migration::{prelude::*, schema::*};

static IDX_SCHEDULE_BATCH_ID: &str = "idx-schedule-batch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(string(Schedule::Id).primary_key())
                    .col(string(Schedule::BatchId))
                    .col(string(Schedule::Task))
                    .col(date(Schedule::AssignedDate))
                    .col(date(Schedule::SubmissionDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCHEDULE_BATCH_ID)
                    .table(Schedule::Table)
                    .col(Schedule::BatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SCHEDULE_BATCH_ID)
                    .table(Schedule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    BatchId,
    Task,
    AssignedDate,
    SubmissionDate,
}
