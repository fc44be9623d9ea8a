use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ChangesDto, CreatedDto, ErrorDto, MessageDto},
        import::RawStudentRow,
        student::{SaveStudentDto, StudentDto},
    },
    server::{
        data::student::StudentRepository, error::Error, model::app::AppState,
        service::import::student::StudentImportService,
    },
};

pub static STUDENT_TAG: &str = "student";

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All registered students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let student_repository = StudentRepository::new(&state.db);

    let students = student_repository.get_all().await?;
    let dtos: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register a single student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = SaveStudentDto,
    responses(
        (status = 201, description = "Student created", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(student): Json<SaveStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student_repository = StudentRepository::new(&state.db);

    let id = student
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let created = student_repository.create(id, student).await?;

    state.notifier.notify();

    Ok((StatusCode::CREATED, Json(CreatedDto { id: created.id })))
}

/// Update a student by record id
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    request_body = SaveStudentDto,
    responses(
        (status = 200, description = "Number of rows updated", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(student): Json<SaveStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student_repository = StudentRepository::new(&state.db);

    let changes = student_repository.update(&id, student).await?;

    state.notifier.notify();

    Ok((StatusCode::OK, Json(ChangesDto { changes })))
}

/// Delete a student by record id
///
/// Deletion is immediate; marks and attendance referencing the student are
/// left in place.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Number of rows deleted", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let student_repository = StudentRepository::new(&state.db);

    let result = student_repository.delete(&id).await?;

    state.notifier.notify();

    Ok((
        StatusCode::OK,
        Json(ChangesDto {
            changes: result.rows_affected,
        }),
    ))
}

/// Import a parsed student registration sheet
///
/// All-or-nothing: the first invalid row aborts the upload and nothing is
/// persisted.
#[utoipa::path(
    post,
    path = "/api/students/bulk",
    tag = STUDENT_TAG,
    request_body = Vec<RawStudentRow>,
    responses(
        (status = 201, description = "Upload committed", body = MessageDto),
        (status = 400, description = "A row failed validation; upload rolled back", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_students(
    State(state): State<AppState>,
    Json(rows): Json<Vec<RawStudentRow>>,
) -> Result<impl IntoResponse, Error> {
    let import_service = StudentImportService::new(&state.db);

    let summary = import_service.import(rows).await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!("Bulk upload successful: {} inserted.", summary.inserted),
        }),
    ))
}
