use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto, User};
use crate::modules::courses::model::{Course, CreateCourseDto};
use crate::modules::enrollments::model::{EnrolledCourse, MyCoursesResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::list_courses,
        crate::modules::enrollments::controller::my_courses,
    ),
    components(
        schemas(
            User,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            Course,
            CreateCourseDto,
            EnrolledCourse,
            MyCoursesResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Courses", description = "Course catalog and administration"),
        (name = "My Courses", description = "Purchased-course access")
    ),
    info(
        title = "Coursedeck API",
        version = "0.1.0",
        description = "A course-sales backend built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
