use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use coursedeck::config::cors::CorsConfig;
use coursedeck::config::email::EmailConfig;
use coursedeck::config::jwt::JwtConfig;
use coursedeck::config::storage::StorageConfig;
use coursedeck::router::init_router;
use coursedeck::state::AppState;
use coursedeck::utils::password::hash_password;
use coursedeck::utils::storage::LocalMediaStorage;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 604800,
    }
}

/// Builds the full application router against the given pool. Email is
/// disabled and uploads land in a per-process temp directory.
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let storage_config = StorageConfig {
        upload_dir: std::env::temp_dir()
            .join(format!("coursedeck-test-uploads-{}", std::process::id()))
            .to_string_lossy()
            .into_owned(),
        public_base_url: "http://localhost:3000/files".to_string(),
        max_file_size: 5 * 1024 * 1024,
        allowed_mime_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
    };

    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        email_config: EmailConfig {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@coursedeck.io".to_string(),
            from_name: "Coursedeck".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        media: Arc::new(LocalMediaStorage::new(storage_config)),
    };

    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    is_admin: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password_hash, name, is_admin)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(email.to_lowercase())
    .bind(&hashed)
    .bind("Test User")
    .bind(is_admin)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(
    pool: &PgPool,
    title: &str,
    is_subscription: bool,
    valid_until: Option<NaiveDate>,
    is_lifetime: bool,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (title, description, price, is_subscription, valid_until, is_lifetime)
         VALUES ($1, 'A test course', 49.90, $2, $3, $4)
         RETURNING id",
    )
    .bind(title)
    .bind(is_subscription)
    .bind(valid_until)
    .bind(is_lifetime)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn enroll(
    pool: &PgPool,
    user_id: Uuid,
    course_id: Uuid,
    purchase_date: DateTime<Utc>,
    expiry_date: Option<NaiveDate>,
) {
    sqlx::query(
        "INSERT INTO enrollments (user_id, course_id, purchase_date, expiry_date)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(course_id)
    .bind(purchase_date)
    .bind(expiry_date)
    .execute(pool)
    .await
    .unwrap();
}

/// Builds a `multipart/form-data` body from text fields only. Returns the
/// content-type header value and the body.
#[allow(dead_code)]
pub fn multipart_form(fields: &[(&str, &str)]) -> (String, String) {
    let boundary = "coursedeck-test-boundary";
    let mut body = String::new();

    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}
