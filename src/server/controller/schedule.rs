use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ChangesDto, CreatedDto, ErrorDto},
        schedule::{SaveScheduleDto, ScheduleDto},
    },
    server::{data::schedule::ScheduleRepository, error::Error, model::app::AppState},
};

pub static SCHEDULE_TAG: &str = "schedule";

/// List all schedules
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All schedules", body = Vec<ScheduleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let schedule_repository = ScheduleRepository::new(&state.db);

    let schedules = schedule_repository.get_all().await?;
    let dtos: Vec<ScheduleDto> = schedules.into_iter().map(ScheduleDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a schedule
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = SaveScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(schedule): Json<SaveScheduleDto>,
) -> Result<impl IntoResponse, Error> {
    let schedule_repository = ScheduleRepository::new(&state.db);

    let id = schedule
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let created = schedule_repository.create(id, schedule).await?;

    state.notifier.notify();

    Ok((StatusCode::CREATED, Json(CreatedDto { id: created.id })))
}

/// Update a schedule by record id
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    request_body = SaveScheduleDto,
    responses(
        (status = 200, description = "Number of rows updated", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(schedule): Json<SaveScheduleDto>,
) -> Result<impl IntoResponse, Error> {
    let schedule_repository = ScheduleRepository::new(&state.db);

    let changes = schedule_repository.update(&id, schedule).await?;

    state.notifier.notify();

    Ok((StatusCode::OK, Json(ChangesDto { changes })))
}

/// Delete a schedule by record id
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Number of rows deleted", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let schedule_repository = ScheduleRepository::new(&state.db);

    let result = schedule_repository.delete(&id).await?;

    state.notifier.notify();

    Ok((
        StatusCode::OK,
        Json(ChangesDto {
            changes: result.rows_affected,
        }),
    ))
}
