use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batch::Table)
                    .if_not_exists()
                    .col(string(Batch::Id).primary_key())
                    .col(string(Batch::BatchNumber))
                    .col(date(Batch::StartDate))
                    .col(date(Batch::EndDate))
                    .col(text_null(Batch::QrCode))
                    .col(string(Batch::BatchType))
                    .col(text(Batch::AttendanceTypes))
                    .col(text(Batch::MonthlyData))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Batch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Batch {
    Table,
    Id,
    BatchNumber,
    StartDate,
    EndDate,
    QrCode,
    BatchType,
    AttendanceTypes,
    MonthlyData,
}
