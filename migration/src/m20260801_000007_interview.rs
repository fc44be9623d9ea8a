use sea_orm_migration::{prelude::*, schema::*};

static IDX_INTERVIEW_STUDENT_ID: &str = "idx-interview-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interview::Table)
                    .if_not_exists()
                    .col(pk_auto(Interview::Id))
                    .col(string(Interview::StudentId))
                    .col(string(Interview::InterviewMode))
                    .col(string(Interview::FocusArea))
                    .col(text(Interview::Questions))
                    .col(text(Interview::Answers))
                    .col(text(Interview::Scores))
                    .col(text(Interview::Feedback))
                    .col(string(Interview::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INTERVIEW_STUDENT_ID)
                    .table(Interview::Table)
                    .col(Interview::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INTERVIEW_STUDENT_ID)
                    .table(Interview::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Interview::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Interview {
    Table,
    Id,
    StudentId,
    InterviewMode,
    FocusArea,
    Questions,
    Answers,
    Scores,
    Feedback,
    Date,
}
