use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, User};

/// bcrypt hash of a throwaway string. Login verifies against this when the
/// email is unknown, so both 401 paths burn a comparable amount of time.
const DUMMY_HASH: &str = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, email_service), fields(email = %dto.email))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequestDto,
        email_service: EmailService,
    ) -> Result<User, AppError> {
        let email = dto.email.trim().to_lowercase();

        let already_taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(&email)
                .fetch_one(db)
                .await?;

        if already_taken {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let password = dto.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Hashing task failed: {}", e)))??;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, name)
             VALUES ($1, $2, $3)
             RETURNING id, email, name, is_admin, created_at",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // Two concurrent registrations can both pass the pre-check; the
            // unique constraint decides the winner.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Email already registered"));
            }
            AppError::from(e)
        })?;

        // Best effort: a failed welcome mail never fails the registration.
        let to_email = user.email.clone();
        let to_name = user.name.clone();
        tokio::spawn(async move {
            if let Err(e) = email_service.send_welcome_email(&to_email, &to_name).await {
                tracing::warn!(email = %to_email, error = %e.error, "Failed to send welcome email");
            }
        });

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            email: String,
            name: String,
            is_admin: bool,
            created_at: DateTime<Utc>,
            password_hash: String,
        }

        let email = dto.email.trim().to_lowercase();

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, name, is_admin, created_at, password_hash
             FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await?;

        let Some(row) = row else {
            let password = dto.password;
            let _ =
                tokio::task::spawn_blocking(move || verify_password(&password, DUMMY_HASH)).await;
            return Err(invalid_credentials());
        };

        let password = dto.password;
        let stored_hash = row.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Verification task failed: {}", e))
                })??;

        if !is_valid {
            return Err(invalid_credentials());
        }

        let access_token = create_token(row.id, &row.email, &row.name, row.is_admin, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            user: User {
                id: row.id,
                email: row.email,
                name: row.name,
                is_admin: row.is_admin,
                created_at: row.created_at,
            },
        })
    }
}

/// Unknown email and wrong password both resolve here, with one shape, so
/// the API does not permit account enumeration.
fn invalid_credentials() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Invalid email or password"))
}
