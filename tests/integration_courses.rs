mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, multipart_form, setup_test_app, test_jwt_config};
use coursedeck::utils::jwt::create_token;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

async fn token_for(pool: &PgPool, email: &str, is_admin: bool) -> String {
    let user = create_test_user(pool, email, "testpass123", is_admin).await;
    create_token(user.id, &user.email, "Test User", is_admin, &test_jwt_config()).unwrap()
}

fn course_request(token: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let (content_type, body) = multipart_form(fields);

    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/admin/courses")
        .header("content-type", content_type);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder.body(Body::from(body)).unwrap()
}

const VALID_FIELDS: &[(&str, &str)] = &[
    ("title", "Rust for Backend Engineers"),
    ("description", "From axum handlers to production."),
    ("price", "149.90"),
    ("is_subscription", "false"),
];

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_requires_authentication(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(course_request(None, VALID_FIELDS))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_rejects_non_admin(pool: PgPool) {
    let token = token_for(&pool, "student@example.com", false).await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(course_request(Some(&token), VALID_FIELDS))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_as_admin(pool: PgPool) {
    let token = token_for(&pool, "admin@example.com", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(course_request(Some(&token), VALID_FIELDS))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["title"], "Rust for Backend Engineers");
    assert_eq!(body["is_subscription"], false);
    assert_eq!(body["cover_image_url"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_lifetime_course_clears_valid_until(pool: PgPool) {
    let token = token_for(&pool, "admin@example.com", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(course_request(
            Some(&token),
            &[
                ("title", "Forever Course"),
                ("description", "Buy once, keep forever."),
                ("price", "299.00"),
                ("is_subscription", "true"),
                ("is_lifetime", "true"),
                ("valid_until", "2030-01-01"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["is_lifetime"], true);
    assert_eq!(body["valid_until"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_missing_title(pool: PgPool) {
    let token = token_for(&pool, "admin@example.com", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(course_request(
            Some(&token),
            &[
                ("description", "No title."),
                ("price", "10.00"),
                ("is_subscription", "false"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_rejects_junk_boolean(pool: PgPool) {
    let token = token_for(&pool, "admin@example.com", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(course_request(
            Some(&token),
            &[
                ("title", "Bad Boolean"),
                ("description", "A course."),
                ("price", "10.00"),
                ("is_subscription", "maybe"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_courses_is_public(pool: PgPool) {
    common::create_test_course(&pool, "Open Course", false, None, false).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Open Course");
}
