//! Middleware for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor verifies the token and carries the
//!    decoded claims into the handler (401 on any failure)
//! 3. Admin-gated handlers extract [`admin::RequireAdmin`] instead, which
//!    rejects claims without the admin flag (403)
//! 4. The handler runs only once every gate has passed
//!
//! The gates compose strictly in that order: the admin check never runs on
//! an unauthenticated request.

pub mod admin;
pub mod auth;
