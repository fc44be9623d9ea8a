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
        import::RawMarkRow,
        mark::{MarkDto, SaveMarkDto},
    },
    server::{
        data::mark::MarkRepository, error::Error, model::app::AppState,
        service::import::mark::MarkImportService,
    },
};

pub static MARK_TAG: &str = "mark";

/// List all marks
#[utoipa::path(
    get,
    path = "/api/marks",
    tag = MARK_TAG,
    responses(
        (status = 200, description = "All recorded marks", body = Vec<MarkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_marks(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let mark_repository = MarkRepository::new(&state.db);

    let marks = mark_repository.get_all().await?;
    let dtos: Vec<MarkDto> = marks.into_iter().map(MarkDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a single mark
///
/// Unlike the bulk path, an explicit insert onto an existing natural key
/// `(studentId, exam, date, type)` is rejected with 409.
#[utoipa::path(
    post,
    path = "/api/marks",
    tag = MARK_TAG,
    request_body = SaveMarkDto,
    responses(
        (status = 201, description = "Mark created", body = CreatedDto),
        (status = 409, description = "Mark already exists for this natural key", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mark(
    State(state): State<AppState>,
    Json(mark): Json<SaveMarkDto>,
) -> Result<impl IntoResponse, Error> {
    let mark_repository = MarkRepository::new(&state.db);

    let exists = mark_repository
        .exists_by_natural_key(&mark.student_id, &mark.exam, mark.date, mark.mark_type)
        .await?;
    if exists {
        return Ok((
            StatusCode::CONFLICT,
            Json(MessageDto {
                message: "Mark for this exam, date and type already exists for this student."
                    .to_string(),
            }),
        )
            .into_response());
    }

    let id = mark.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
    let created = mark_repository
        .create(
            id,
            mark.student_id,
            mark.exam,
            mark.score,
            mark.mark_type,
            mark.date,
        )
        .await?;

    state.notifier.notify();

    Ok((StatusCode::CREATED, Json(CreatedDto { id: created.id })).into_response())
}

/// Update a mark by record id
///
/// The edit path allows explicit overwrite by primary key.
#[utoipa::path(
    put,
    path = "/api/marks/{id}",
    tag = MARK_TAG,
    request_body = SaveMarkDto,
    responses(
        (status = 200, description = "Number of rows updated", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mark): Json<SaveMarkDto>,
) -> Result<impl IntoResponse, Error> {
    let mark_repository = MarkRepository::new(&state.db);

    let changes = mark_repository.update(&id, mark).await?;

    state.notifier.notify();

    Ok((StatusCode::OK, Json(ChangesDto { changes })))
}

/// Delete a mark by record id
#[utoipa::path(
    delete,
    path = "/api/marks/{id}",
    tag = MARK_TAG,
    responses(
        (status = 200, description = "Number of rows deleted", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let mark_repository = MarkRepository::new(&state.db);

    let result = mark_repository.delete(&id).await?;

    state.notifier.notify();

    Ok((
        StatusCode::OK,
        Json(ChangesDto {
            changes: result.rows_affected,
        }),
    ))
}

/// Import a parsed marks sheet
///
/// All-or-nothing: the first invalid row aborts the upload. Rows whose
/// natural key already exists are skipped, making re-uploads idempotent.
#[utoipa::path(
    post,
    path = "/api/marks/bulk",
    tag = MARK_TAG,
    request_body = Vec<RawMarkRow>,
    responses(
        (status = 201, description = "Upload committed", body = MessageDto),
        (status = 400, description = "A row failed validation; upload rolled back", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_marks(
    State(state): State<AppState>,
    Json(rows): Json<Vec<RawMarkRow>>,
) -> Result<impl IntoResponse, Error> {
    let import_service = MarkImportService::new(&state.db);

    let summary = import_service.import(rows).await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: format!(
                "Bulk marks uploaded successfully: {} inserted, {} skipped.",
                summary.inserted, summary.skipped
            ),
        }),
    ))
}
