//! Fixture factories producing ready-to-insert active models.
//!
//! Identifiers are caller-chosen so tests read naturally ("S1" in "B1");
//! everything else gets plausible defaults.

use chrono::NaiveDate;
use entity::{attendance::AttendanceType, mark::MarkType};
use sea_orm::ActiveValue;

fn date(value: &str) -> NaiveDate {
    value.parse().expect("fixture dates are valid")
}

pub fn mock_batch(id: &str, batch_number: &str) -> entity::batch::ActiveModel {
    entity::batch::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        batch_number: ActiveValue::Set(batch_number.to_string()),
        start_date: ActiveValue::Set(date("2024-01-01")),
        end_date: ActiveValue::Set(date("2024-06-30")),
        qr_code: ActiveValue::Set(None),
        batch_type: ActiveValue::Set("weekday".to_string()),
        attendance_types: ActiveValue::Set(r#"["class","lab"]"#.to_string()),
        monthly_data: ActiveValue::Set("{}".to_string()),
    }
}

pub fn mock_student(id: &str, batch_id: &str) -> entity::student::ActiveModel {
    entity::student::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        student_id: ActiveValue::Set(format!("STU-{}", id)),
        name: ActiveValue::Set(format!("Student {}", id)),
        email: ActiveValue::Set(format!("{}@example.com", id.to_lowercase())),
        mobile: ActiveValue::Set("9876543210".to_string()),
        batch_id: ActiveValue::Set(batch_id.to_string()),
        active: ActiveValue::Set(true),
        photo: ActiveValue::Set(String::new()),
        password: ActiveValue::Set("password".to_string()),
        profile_complete: ActiveValue::Set(false),
        education: ActiveValue::Set(None),
    }
}

pub fn mock_mark(
    id: &str,
    student_id: &str,
    exam: &str,
    mark_date: &str,
    mark_type: MarkType,
) -> entity::mark::ActiveModel {
    entity::mark::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        student_id: ActiveValue::Set(student_id.to_string()),
        exam: ActiveValue::Set(exam.to_string()),
        score: ActiveValue::Set(75.0),
        mark_type: ActiveValue::Set(mark_type),
        date: ActiveValue::Set(date(mark_date)),
    }
}

pub fn mock_attendance(
    student_id: &str,
    attendance_date: &str,
    attendance_type: AttendanceType,
) -> entity::attendance::ActiveModel {
    entity::attendance::ActiveModel {
        student_id: ActiveValue::Set(student_id.to_string()),
        date: ActiveValue::Set(date(attendance_date)),
        attendance_type: ActiveValue::Set(attendance_type),
        present: ActiveValue::Set(true),
        in_time: ActiveValue::Set(None),
        out_time: ActiveValue::Set(None),
        ..Default::default()
    }
}
