use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::my_courses;

pub fn init_my_courses_router() -> Router<AppState> {
    Router::new().route("/my-courses", get(my_courses))
}
