use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::MyCoursesResponse;
use super::service::EnrollmentService;

/// List the courses the caller's purchases entitle them to
#[utoipa::path(
    get,
    path = "/api/users/my-courses",
    responses(
        (status = 200, description = "Accessible courses, most recent purchase first", body = MyCoursesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "My Courses"
)]
#[instrument(skip(state))]
pub async fn my_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MyCoursesResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    let courses = EnrollmentService::list_accessible_courses(&state.db, user_id).await?;

    Ok(Json(MyCoursesResponse { courses }))
}
