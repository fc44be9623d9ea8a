//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET/POST /api/students`, `PUT/DELETE /api/students/{id}` - Student management
/// - `POST /api/students/bulk` - Transactional student import
/// - `GET/POST /api/batches`, `PUT/DELETE /api/batches/{id}` - Batch management
/// - `GET/POST /api/schedules`, `PUT/DELETE /api/schedules/{id}` - Schedule management
/// - `GET/POST /api/marks`, `PUT/DELETE /api/marks/{id}` - Mark management
/// - `POST /api/marks/bulk` - Transactional marks import
/// - `GET/POST /api/attendance` - Attendance records
/// - `POST /api/attendance/bulk` - Transactional attendance import
/// - `GET/POST /api/resume-reviews` - Resume review records
/// - `POST /api/interviews`, `GET /api/interviews/{student_id}` - Interview records
/// - `POST /api/login` - Admin and student login
/// - `GET /api/events` - WebSocket pushing `data_changed` events
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be
/// served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "VCube", description = "Student management API"), tags(
        (name = controller::student::STUDENT_TAG, description = "Student API routes"),
        (name = controller::batch::BATCH_TAG, description = "Batch API routes"),
        (name = controller::schedule::SCHEDULE_TAG, description = "Schedule API routes"),
        (name = controller::mark::MARK_TAG, description = "Mark API routes"),
        (name = controller::attendance::ATTENDANCE_TAG, description = "Attendance API routes"),
        (name = controller::resume_review::RESUME_REVIEW_TAG, description = "Resume review API routes"),
        (name = controller::interview::INTERVIEW_TAG, description = "Interview API routes"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::events::EVENTS_TAG, description = "Change notification channel"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::student::get_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(controller::student::bulk_create_students))
        .routes(routes!(
            controller::batch::get_batches,
            controller::batch::create_batch
        ))
        .routes(routes!(
            controller::batch::update_batch,
            controller::batch::delete_batch
        ))
        .routes(routes!(
            controller::schedule::get_schedules,
            controller::schedule::create_schedule
        ))
        .routes(routes!(
            controller::schedule::update_schedule,
            controller::schedule::delete_schedule
        ))
        .routes(routes!(
            controller::mark::get_marks,
            controller::mark::create_mark
        ))
        .routes(routes!(
            controller::mark::update_mark,
            controller::mark::delete_mark
        ))
        .routes(routes!(controller::mark::bulk_create_marks))
        .routes(routes!(
            controller::attendance::get_attendance,
            controller::attendance::create_attendance
        ))
        .routes(routes!(controller::attendance::bulk_create_attendance))
        .routes(routes!(
            controller::resume_review::get_resume_reviews,
            controller::resume_review::create_resume_review
        ))
        .routes(routes!(controller::interview::create_interview))
        .routes(routes!(controller::interview::get_student_interviews))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::events::subscribe))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
