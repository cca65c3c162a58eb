//! Operator commands dispatched from `main` before server startup.

use sqlx::PgPool;

use crate::utils::password::hash_password;

/// Creates (or promotes) the bootstrap administrator account.
///
/// Administrators are never creatable through the HTTP API; this is the
/// only entry point. Re-running against an existing email promotes that
/// account instead of failing.
pub async fn create_admin(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let email = email.trim().to_lowercase();
    let password_hash = hash_password(password).map_err(|e| e.error)?;

    sqlx::query(
        "INSERT INTO users (email, password_hash, name, is_admin)
         VALUES ($1, $2, $3, TRUE)
         ON CONFLICT (email) DO UPDATE SET is_admin = TRUE",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(())
}
