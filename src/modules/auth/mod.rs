//! Authentication module.
//!
//! Registration and login, plus the claim structures the rest of the API
//! consumes through the auth middleware.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
