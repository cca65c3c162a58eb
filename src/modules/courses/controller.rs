use anyhow::anyhow;
use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::admin::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::storage::{MediaStorage, StorageError};
use crate::validator::format_errors;

use super::model::{Course, CoverUpload, CreateCourseDto};
use super::service::CourseService;

/// Create a new course (administrators only)
///
/// Accepts `multipart/form-data`: the metadata fields as text parts and an
/// optional `cover_image` file part. The image is stored through the media
/// collaborator first; if that fails the course is not created.
#[utoipa::path(
    post,
    path = "/api/admin/courses",
    request_body(content = CreateCourseDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Course created successfully", body = Course),
        (status = 400, description = "Bad request - missing or malformed fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 502, description = "Media storage unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, multipart, auth_user), fields(admin = %auth_user.email()))]
pub async fn create_course(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let (dto, cover) = parse_course_form(multipart).await?;

    let cover_image_url = match cover {
        Some(upload) => {
            let key = format!(
                "course_covers/{}.{}",
                Uuid::new_v4(),
                extension_for(&upload.content_type)
            );
            let url = state
                .media
                .store(&key, &upload.bytes, &upload.content_type)
                .await
                .map_err(|e| match e {
                    StorageError::InvalidFileSize { .. } | StorageError::InvalidMimeType { .. } => {
                        AppError::bad_request(anyhow!(e))
                    }
                    _ => AppError::bad_gateway(anyhow!("Cover upload failed: {}", e)),
                })?;
            tracing::info!(admin = %auth_user.email(), url = %url, "Cover image stored");
            Some(url)
        }
        None => None,
    };

    let course = CourseService::create_course(&state.db, dto, cover_image_url).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// List the public course catalog
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Course catalog", body = [Course]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Assembles the typed DTO from the multipart body, then runs the usual
/// validation rules on it. Unknown parts are ignored.
async fn parse_course_form(
    mut multipart: Multipart,
) -> Result<(CreateCourseDto, Option<CoverUpload>), AppError> {
    let mut title = None;
    let mut description = None;
    let mut price = None;
    let mut is_subscription = None;
    let mut valid_until = None;
    let mut is_lifetime = false;
    let mut cover = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow!("Malformed multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => title = Some(text_field(field, "title").await?),
            "description" => description = Some(text_field(field, "description").await?),
            "price" => {
                let raw = text_field(field, "price").await?;
                price = Some(
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| AppError::bad_request(anyhow!("price must be a number")))?,
                );
            }
            "is_subscription" => {
                let raw = text_field(field, "is_subscription").await?;
                is_subscription = Some(parse_bool("is_subscription", &raw)?);
            }
            "is_lifetime" => {
                let raw = text_field(field, "is_lifetime").await?;
                is_lifetime = parse_bool("is_lifetime", &raw)?;
            }
            "valid_until" => {
                let raw = text_field(field, "valid_until").await?;
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    valid_until = Some(trimmed.parse::<NaiveDate>().map_err(|_| {
                        AppError::bad_request(anyhow!(
                            "valid_until must be an ISO-8601 date (YYYY-MM-DD)"
                        ))
                    })?);
                }
            }
            "cover_image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request(anyhow!("Failed to read cover image: {}", e))
                })?;
                cover = Some(CoverUpload {
                    bytes: bytes.to_vec(),
                    content_type,
                });
            }
            _ => {}
        }
    }

    let dto = CreateCourseDto {
        title: required(title, "title")?,
        description: required(description, "description")?,
        price: required(price, "price")?,
        is_subscription: required(is_subscription, "is_subscription")?,
        valid_until,
        is_lifetime,
    };

    dto.validate()
        .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

    Ok((dto, cover))
}

async fn text_field(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::bad_request(anyhow!("Invalid {} field: {}", name, e)))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::bad_request(anyhow!("{} is required", name)))
}

// Booleans arrive as form text; only the canonical spellings are accepted.
fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::bad_request(anyhow!(
            "{} must be a boolean (true/false)",
            name
        ))),
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_canonical_spellings() {
        assert!(parse_bool("is_subscription", "true").unwrap());
        assert!(parse_bool("is_subscription", "1").unwrap());
        assert!(!parse_bool("is_subscription", "false").unwrap());
        assert!(!parse_bool("is_subscription", " 0 ").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_junk() {
        assert!(parse_bool("is_subscription", "yes").is_err());
        assert!(parse_bool("is_subscription", "TRUE ish").is_err());
        assert!(parse_bool("is_subscription", "").is_err());
    }

    #[test]
    fn test_extension_for_known_types() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("application/pdf"), "bin");
    }
}
