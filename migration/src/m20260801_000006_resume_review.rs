use sea_orm_migration::{prelude::*, schema::*};

static IDX_RESUME_REVIEW_STUDENT_ID: &str = "idx-resume_review-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResumeReview::Table)
                    .if_not_exists()
                    .col(pk_auto(ResumeReview::Id))
                    .col(string(ResumeReview::StudentId))
                    .col(string(ResumeReview::BatchId))
                    .col(string(ResumeReview::Date))
                    .col(double(ResumeReview::MatchScore))
                    .col(text(ResumeReview::ResumeText))
                    .col(text(ResumeReview::JobDescription))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESUME_REVIEW_STUDENT_ID)
                    .table(ResumeReview::Table)
                    .col(ResumeReview::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESUME_REVIEW_STUDENT_ID)
                    .table(ResumeReview::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResumeReview::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ResumeReview {
    Table,
    Id,
    StudentId,
    BatchId,
    Date,
    MatchScore,
    ResumeText,
    JobDescription,
}
