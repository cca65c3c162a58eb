use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::entitlement::is_accessible;
use super::model::{EnrolledCourse, EnrollmentRow};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Every course the user may access right now, most recent purchase
    /// first (the enrollment insertion counter breaks ties). No enrollments
    /// is a normal state: the result is simply empty.
    #[instrument(skip(db))]
    pub async fn list_accessible_courses(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<EnrolledCourse>, AppError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT
                c.id AS course_id,
                c.title,
                c.description,
                c.cover_image_url,
                c.is_subscription,
                c.valid_until,
                c.is_lifetime,
                e.purchase_date,
                e.expiry_date
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             WHERE e.user_id = $1
             ORDER BY e.purchase_date DESC, e.seq ASC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        let today = Utc::now().date_naive();

        Ok(rows
            .into_iter()
            .filter(|row| {
                is_accessible(
                    row.is_subscription,
                    row.is_lifetime,
                    row.expiry_date,
                    row.valid_until,
                    today,
                )
            })
            .map(|row| EnrolledCourse {
                id: row.course_id,
                title: row.title,
                description: row.description,
                cover_image_url: row.cover_image_url,
                purchase_date: row.purchase_date,
                expiry_date: row.expiry_date,
            })
            .collect())
    }
}
