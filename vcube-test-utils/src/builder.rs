//! Declarative test builder for test setup.
//!
//! Provides the `TestBuilder` API for configuring test environments before
//! execution: database tables to create and fixture rows to insert.
//! Methods chain together and all operations run during the final
//! `build()` call, with fixtures inserted in dependency order (batches,
//! then students, then marks and attendance).

use entity::{attendance::AttendanceType, mark::MarkType};
use sea_orm::{sea_query::TableCreateStatement, ActiveModelTrait, EntityTrait, Schema};

use crate::{error::TestError, fixtures::factory, setup::TestSetup};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    batches: Vec<entity::batch::ActiveModel>,
    students: Vec<entity::student::ActiveModel>,
    marks: Vec<entity::mark::ActiveModel>,
    attendance: Vec<entity::attendance::ActiveModel>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            batches: Vec::new(),
            students: Vec::new(),
            marks: Vec::new(),
            attendance: Vec::new(),
        }
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add every table the bulk-import pipeline touches: batches,
    /// students, marks, and attendance.
    pub fn with_import_tables(self) -> Self {
        self.with_table(entity::prelude::Batch)
            .with_table(entity::prelude::Student)
            .with_table(entity::prelude::Mark)
            .with_table(entity::prelude::Attendance)
    }

    /// Insert a batch fixture during `build()`.
    pub fn with_batch(mut self, id: &str) -> Self {
        self.batches.push(factory::mock_batch(id, id));
        self
    }

    /// Insert a student fixture belonging to the given batch.
    pub fn with_student(mut self, id: &str, batch_id: &str) -> Self {
        self.students.push(factory::mock_student(id, batch_id));
        self
    }

    /// Insert a mark fixture with the given natural-key components.
    pub fn with_mark(
        mut self,
        id: &str,
        student_id: &str,
        exam: &str,
        date: &str,
        mark_type: MarkType,
    ) -> Self {
        self.marks
            .push(factory::mock_mark(id, student_id, exam, date, mark_type));
        self
    }

    /// Insert an attendance fixture with the given natural-key components.
    pub fn with_attendance(
        mut self,
        student_id: &str,
        date: &str,
        attendance_type: AttendanceType,
    ) -> Self {
        self.attendance
            .push(factory::mock_attendance(student_id, date, attendance_type));
        self
    }

    /// Create the configured tables and insert all queued fixtures.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        setup.with_tables(self.tables).await?;

        for batch in self.batches {
            batch.insert(&setup.db).await?;
        }
        for student in self.students {
            student.insert(&setup.db).await?;
        }
        for mark in self.marks {
            mark.insert(&setup.db).await?;
        }
        for record in self.attendance {
            record.insert(&setup.db).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
