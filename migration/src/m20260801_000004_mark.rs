use sea_orm_migration::{prelude::*, schema::*};

static IDX_MARK_STUDENT_ID: &str = "idx-mark-student_id";
static IDX_MARK_NATURAL_KEY: &str = "idx-mark-natural_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mark::Table)
                    .if_not_exists()
                    .col(string(Mark::Id).primary_key())
                    .col(string(Mark::StudentId))
                    .col(string(Mark::Exam))
                    .col(double(Mark::Score))
                    .col(string_len(Mark::MarkType, 16))
                    .col(date(Mark::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MARK_STUDENT_ID)
                    .table(Mark::Table)
                    .col(Mark::StudentId)
                    .to_owned(),
            )
            .await?;

        // Point lookups by natural key drive the bulk-import duplicate check.
        // Deliberately non-unique: the skip-on-duplicate policy lives in the
        // import pipeline, not in a constraint.
        manager
            .create_index(
                Index::create()
                    .name(IDX_MARK_NATURAL_KEY)
                    .table(Mark::Table)
                    .col(Mark::StudentId)
                    .col(Mark::Exam)
                    .col(Mark::Date)
                    .col(Mark::MarkType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARK_NATURAL_KEY)
                    .table(Mark::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARK_STUDENT_ID)
                    .table(Mark::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Mark::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Mark {
    Table,
    Id,
    StudentId,
    Exam,
    Score,
    MarkType,
    Date,
}
