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
        batch::{BatchDto, SaveBatchDto},
    },
    server::{data::batch::BatchRepository, error::Error, model::app::AppState},
};

pub static BATCH_TAG: &str = "batch";

/// List all batches
#[utoipa::path(
    get,
    path = "/api/batches",
    tag = BATCH_TAG,
    responses(
        (status = 200, description = "All batches", body = Vec<BatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let batch_repository = BatchRepository::new(&state.db);

    let batches = batch_repository.get_all().await?;
    let dtos: Vec<BatchDto> = batches.into_iter().map(BatchDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a batch
#[utoipa::path(
    post,
    path = "/api/batches",
    tag = BATCH_TAG,
    request_body = SaveBatchDto,
    responses(
        (status = 201, description = "Batch created", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_batch(
    State(state): State<AppState>,
    Json(batch): Json<SaveBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let batch_repository = BatchRepository::new(&state.db);

    let id = Uuid::new_v4().to_string();
    let created = batch_repository.create(id, batch).await?;

    state.notifier.notify();

    Ok((StatusCode::CREATED, Json(CreatedDto { id: created.id })))
}

/// Update a batch by record id
#[utoipa::path(
    put,
    path = "/api/batches/{id}",
    tag = BATCH_TAG,
    request_body = SaveBatchDto,
    responses(
        (status = 200, description = "Number of rows updated", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(batch): Json<SaveBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let batch_repository = BatchRepository::new(&state.db);

    let changes = batch_repository.update(&id, batch).await?;

    state.notifier.notify();

    Ok((StatusCode::OK, Json(ChangesDto { changes })))
}

/// Delete a batch by record id
#[utoipa::path(
    delete,
    path = "/api/batches/{id}",
    tag = BATCH_TAG,
    responses(
        (status = 200, description = "Number of rows deleted", body = ChangesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let batch_repository = BatchRepository::new(&state.db);

    let result = batch_repository.delete(&id).await?;

    state.notifier.notify();

    Ok((
        StatusCode::OK,
        Json(ChangesDto {
            changes: result.rows_affected,
        }),
    ))
}
