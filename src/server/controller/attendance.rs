use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        attendance::{AttendanceDto, SaveAttendanceDto},
        import::AttendanceBulkRequest,
    },
    server::{
        data::attendance::AttendanceRepository, error::Error, model::app::AppState,
        service::import::attendance::AttendanceImportService,
    },
};

pub static ATTENDANCE_TAG: &str = "attendance";

/// List all attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "All attendance records", body = Vec<AttendanceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let attendance_repository = AttendanceRepository::new(&state.db);

    let records = attendance_repository.get_all().await?;
    let dtos: Vec<AttendanceDto> = records.into_iter().map(AttendanceDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a single attendance event (QR scan or manual entry)
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = SaveAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(record): Json<SaveAttendanceDto>,
) -> Result<impl IntoResponse, Error> {
    let attendance_repository = AttendanceRepository::new(&state.db);

    let created = attendance_repository
        .create(
            record.student_id,
            record.date,
            record.attendance_type,
            record.present,
            record.in_time,
            record.out_time,
        )
        .await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            id: created.id.to_string(),
        }),
    ))
}

/// Import one month of attendance for one batch
///
/// All-or-nothing: the first invalid row aborts the upload. Rows whose
/// natural key already exists are skipped, making re-uploads idempotent.
#[utoipa::path(
    post,
    path = "/api/attendance/bulk",
    tag = ATTENDANCE_TAG,
    request_body = AttendanceBulkRequest,
    responses(
        (status = 201, description = "Upload committed", body = MessageDto),
        (status = 400, description = "The envelope or a row failed validation; upload rolled back", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_attendance(
    State(state): State<AppState>,
    Json(request): Json<AttendanceBulkRequest>,
) -> Result<impl IntoResponse, Error> {
    let import_service = AttendanceImportService::new(&state.db);

    let summary = import_service.import(request).await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!(
                "Bulk attendance uploaded successfully: {} inserted, {} skipped.",
                summary.inserted, summary.skipped
            ),
        }),
    ))
}
