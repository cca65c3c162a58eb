use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Course, CreateCourseDto};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn create_course(
        db: &PgPool,
        dto: CreateCourseDto,
        cover_image_url: Option<String>,
    ) -> Result<Course, AppError> {
        // A lifetime course has no calendar window.
        let valid_until = if dto.is_lifetime {
            None
        } else {
            dto.valid_until
        };

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses
                 (title, description, cover_image_url, price, is_subscription, valid_until, is_lifetime)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, title, description, cover_image_url, price, is_subscription,
                       valid_until, is_lifetime, created_at",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&cover_image_url)
        .bind(dto.price)
        .bind(dto.is_subscription)
        .bind(valid_until)
        .bind(dto.is_lifetime)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, cover_image_url, price, is_subscription,
                    valid_until, is_lifetime, created_at
             FROM courses
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }
}
