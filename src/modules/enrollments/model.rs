use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One entry of the my-courses listing: course metadata joined with the
/// caller's enrollment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrolledCourse {
    /// Course id
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MyCoursesResponse {
    pub courses: Vec<EnrolledCourse>,
}

/// Raw join row; carries the access-model columns the expiry policy needs
/// before rows are narrowed down to [`EnrolledCourse`].
#[derive(Debug, FromRow)]
pub struct EnrollmentRow {
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub is_subscription: bool,
    pub valid_until: Option<NaiveDate>,
    pub is_lifetime: bool,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: Option<NaiveDate>,
}
