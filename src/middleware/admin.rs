//! Administrator gate.
//!
//! Always runs after authentication: the request must carry a valid token,
//! and the verified claims must have `is_admin` set. A missing or false
//! flag is the only non-admin state; nothing grants admin implicitly.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that authenticates the caller and then requires the admin
/// flag, in that order. The token is decoded once; the inner [`AuthUser`]
/// carries the claims into the handler.
///
/// ```rust,ignore
/// pub async fn create_course(
///     State(state): State<AppState>,
///     RequireAdmin(auth_user): RequireAdmin,
/// ) -> Result<Json<Course>, AppError> {
///     // Only administrators reach this point
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_admin(&auth_user)?;

        Ok(RequireAdmin(auth_user))
    }
}

/// Helper for manual checks in controller logic.
pub fn check_admin(auth_user: &AuthUser) -> Result<(), AppError> {
    if !auth_user.is_admin() {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Administrator privileges required."
        )));
    }

    Ok(())
}
