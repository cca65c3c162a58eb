//! Enrollments module.
//!
//! Read-side only: the purchase records themselves are written at checkout,
//! outside this service. Here they are joined with course metadata and run
//! through the expiry policy to produce the caller's accessible courses.

pub mod controller;
pub mod entitlement;
pub mod model;
pub mod router;
pub mod service;
