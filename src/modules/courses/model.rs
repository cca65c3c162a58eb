use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Course metadata as stored and listed publicly.
///
/// The access model is carried by three columns: `is_lifetime` marks a
/// course that never expires once bought, `is_subscription` marks a
/// time-bounded one, and `valid_until` is the optional course-wide sales
/// window that caps every subscription to it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub price: f64,
    pub is_subscription: bool,
    pub valid_until: Option<NaiveDate>,
    pub is_lifetime: bool,
    pub created_at: DateTime<Utc>,
}

/// Typed course-creation fields, assembled from the multipart form.
///
/// Text parts are parsed into real types before validation; booleans only
/// accept `true`/`false`/`1`/`0` and dates must be ISO-8601.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub is_subscription: bool,
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub is_lifetime: bool,
}

/// An in-memory cover image lifted out of the multipart body.
pub struct CoverUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl fmt::Debug for CoverUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverUpload")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("content_type", &self.content_type)
            .finish()
    }
}
