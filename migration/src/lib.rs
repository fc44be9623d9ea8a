pub use sea_orm_migration::prelude::*;

mod m20260801_000001_batch;
mod m20260801_000002_student;
mod m20260801_000003_schedule;
mod m20260801_000004_mark;
mod m20260801_000005_attendance;
mod m20260801_000006_resume_review;
mod m20260801_000007_interview;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_batch::Migration),
            Box::new(m20260801_000002_student::Migration),
            Box::new(m20260801_000003_schedule::Migration),
            Box::new(m20260801_000004_mark::Migration),
            Box::new(m20260801_000005_attendance::Migration),
            Box::new(m20260801_000006_resume_review::Migration),
            Box::new(m20260801_000007_interview::Migration),
        ]
    }
}
