use sea_orm_migration::{prelude::*, schema::*};

static IDX_STUDENT_BATCH_ID: &str = "idx-student-batch_id";
static IDX_STUDENT_EMAIL: &str = "idx-student-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Id).primary_key())
                    .col(string_uniq(Student::StudentId))
                    .col(string(Student::Name))
                    .col(string(Student::Email))
                    .col(string(Student::Mobile))
                    .col(string(Student::BatchId))
                    .col(boolean(Student::Active))
                    .col(string(Student::Photo))
                    .col(string(Student::Password))
                    .col(boolean(Student::ProfileComplete))
                    .col(text_null(Student::Education))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_BATCH_ID)
                    .table(Student::Table)
                    .col(Student::BatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_EMAIL)
                    .table(Student::Table)
                    .col(Student::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_EMAIL)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_BATCH_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    StudentId,
    Name,
    Email,
    Mobile,
    BatchId,
    Active,
    Photo,
    Password,
    ProfileComplete,
    Education,
}
