use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_course, list_courses};

/// Public catalog routes.
pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/", get(list_courses))
}

/// Admin-only routes; each handler enforces the admin gate through the
/// `RequireAdmin` extractor.
pub fn init_admin_courses_router() -> Router<AppState> {
    Router::new().route("/courses", post(create_course))
}
