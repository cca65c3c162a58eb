use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hashes a password with bcrypt at the fixed work factor.
///
/// A bcrypt round is deliberately slow; async callers must run this through
/// `tokio::task::spawn_blocking` so it never stalls the runtime.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored hash. The comparison inside bcrypt
/// is constant-time with respect to the hash contents.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
