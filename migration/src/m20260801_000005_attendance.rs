use sea_orm_migration::{prelude::*, schema::*};

static IDX_ATTENDANCE_NATURAL_KEY: &str = "idx-attendance-natural_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(string(Attendance::StudentId))
                    .col(date(Attendance::Date))
                    .col(string_len(Attendance::AttendanceType, 16))
                    .col(boolean(Attendance::Present))
                    .col(string_null(Attendance::InTime))
                    .col(string_null(Attendance::OutTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_NATURAL_KEY)
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .col(Attendance::AttendanceType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_NATURAL_KEY)
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    StudentId,
    Date,
    AttendanceType,
    Present,
    InTime,
    OutTime,
}
