use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        resume_review::{ResumeReviewDto, SaveResumeReviewDto},
    },
    server::{data::resume_review::ResumeReviewRepository, error::Error, model::app::AppState},
};

pub static RESUME_REVIEW_TAG: &str = "resume-review";

/// List all resume reviews
#[utoipa::path(
    get,
    path = "/api/resume-reviews",
    tag = RESUME_REVIEW_TAG,
    responses(
        (status = 200, description = "All resume reviews", body = Vec<ResumeReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resume_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let review_repository = ResumeReviewRepository::new(&state.db);

    let reviews = review_repository.get_all().await?;
    let dtos: Vec<ResumeReviewDto> = reviews.into_iter().map(ResumeReviewDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Store a resume review result
#[utoipa::path(
    post,
    path = "/api/resume-reviews",
    tag = RESUME_REVIEW_TAG,
    request_body = SaveResumeReviewDto,
    responses(
        (status = 201, description = "Resume review stored", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resume_review(
    State(state): State<AppState>,
    Json(review): Json<SaveResumeReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review_repository = ResumeReviewRepository::new(&state.db);

    let created = review_repository.create(review).await?;

    state.notifier.notify();

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            id: created.id.to_string(),
        }),
    ))
}
