use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        interview::{InterviewDto, SaveInterviewDto},
    },
    server::{data::interview::InterviewRepository, error::Error, model::app::AppState},
};

pub static INTERVIEW_TAG: &str = "interview";

/// Store a recorded interview session
#[utoipa::path(
    post,
    path = "/api/interviews",
    tag = INTERVIEW_TAG,
    request_body = SaveInterviewDto,
    responses(
        (status = 201, description = "Interview stored", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_interview(
    State(state): State<AppState>,
    Json(interview): Json<SaveInterviewDto>,
) -> Result<impl IntoResponse, Error> {
    let interview_repository = InterviewRepository::new(&state.db);

    let created = interview_repository.create(interview).await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            id: created.id.to_string(),
        }),
    ))
}

/// List interview sessions for one student
#[utoipa::path(
    get,
    path = "/api/interviews/{student_id}",
    tag = INTERVIEW_TAG,
    responses(
        (status = 200, description = "Interview sessions for the student", body = Vec<InterviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_interviews(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let interview_repository = InterviewRepository::new(&state.db);

    let interviews = interview_repository.get_by_student_id(&student_id).await?;
    let dtos: Vec<InterviewDto> = interviews.into_iter().map(InterviewDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
